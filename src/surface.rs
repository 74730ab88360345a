use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

use crate::fonts::FontHandle;

/// Longest text a surface lays out after truncation.
pub const MAX_TEXT_LEN: usize = 32;

const ELLIPSIS: &str = "...";

/// Drawing primitives the watch face needs from the display.
pub trait Surface {
    type Error;

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error>;

    /// Draws `text` centered in `area`. Text wider than `area` is cut short
    /// and ends in an ellipsis; nothing is drawn outside `area`.
    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        area: Rectangle,
        color: BinaryColor,
    ) -> Result<(), Self::Error>;
}

/// [`Surface`] over any monochrome `embedded-graphics` draw target.
pub struct GraphicsSurface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsSurface<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Surface for GraphicsSurface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        area: Rectangle,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        let font = font.mono();
        let mut fitted: String<MAX_TEXT_LEN> = String::new();
        let text = fit_text(text, font, area.size.width, &mut fitted);

        let character_style = MonoTextStyle::new(font, color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let mut clipped = self.target.clipped(&area);
        Text::with_text_style(text, area.center(), character_style, text_style).draw(&mut clipped)?;
        Ok(())
    }
}

/// Returns `text` unchanged if it fits `width` pixels of `font`, otherwise
/// writes a shortened copy ending in `...` into `out` and returns that.
pub fn fit_text<'a, const N: usize>(
    text: &'a str,
    font: &MonoFont<'_>,
    width: u32,
    out: &'a mut String<N>,
) -> &'a str {
    let advance = font.character_size.width + font.character_spacing;
    let fits = ((width + font.character_spacing) / advance.max(1)) as usize;

    if text.chars().count() <= fits {
        return text;
    }

    out.clear();
    let keep = fits.saturating_sub(ELLIPSIS.len()).min(N.saturating_sub(ELLIPSIS.len()));
    for c in text.chars().take(keep) {
        if out.push(c).is_err() {
            break;
        }
    }
    for c in ELLIPSIS.chars().take(fits.min(ELLIPSIS.len())) {
        if out.push(c).is_err() {
            break;
        }
    }
    out.as_str()
}
