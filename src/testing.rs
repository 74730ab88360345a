use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, primitives::Rectangle};

use crate::fonts::FontHandle;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Fill(Rectangle, BinaryColor),
    Text(String, FontHandle, Rectangle, BinaryColor),
}

/// Surface that records what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Fill(area, color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        area: Rectangle,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        self.commands
            .push(DrawCommand::Text(text.into(), font, area, color));
        Ok(())
    }
}
