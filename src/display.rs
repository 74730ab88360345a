use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::clock::{DayPhase, ZoneReading};
use crate::face::Zone;
use crate::fonts::Fonts;
use crate::surface::Surface;

/// Background of a zone where it is day; text is drawn in the other color.
pub const DAY_FILL: BinaryColor = BinaryColor::On;
/// Background of a zone where it is night.
pub const NIGHT_FILL: BinaryColor = BinaryColor::Off;

/// Background and text colors for a zone.
pub fn palette(phase: DayPhase) -> (BinaryColor, BinaryColor) {
    match phase {
        DayPhase::Day => (DAY_FILL, NIGHT_FILL),
        DayPhase::Night => (NIGHT_FILL, DAY_FILL),
    }
}

/// Top third of a zone region, holding the zone name.
pub fn name_area(region: &Rectangle) -> Rectangle {
    let Size { width, height } = region.size;
    Rectangle::new(region.top_left, Size::new(width, height / 3))
}

/// The two thirds below the name, holding the time.
pub fn time_area(region: &Rectangle) -> Rectangle {
    let Size { width, height } = region.size;
    Rectangle::new(
        region.top_left + Point::new(0, (height / 3) as i32),
        Size::new(width, 2 * height / 3),
    )
}

/// Paints one zone: the background in its day or night color, the name on
/// top and the `HH:MM` time below it in the larger font.
pub fn render_zone<S: Surface>(
    surface: &mut S,
    zone: &Zone,
    reading: &ZoneReading,
    fonts: &Fonts,
) -> Result<(), S::Error> {
    let region = zone.region();
    let (fill, text) = palette(reading.phase);

    surface.fill_rect(region, fill)?;
    surface.draw_text(zone.name(), fonts.name, name_area(&region), text)?;

    let mut buf = [0u8; 8];
    surface.draw_text(reading.hhmm(&mut buf), fonts.time, time_area(&region), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{compute_zone_local_time, BrokenDownTime};
    use crate::fonts::FontHandle;
    use crate::testing::{DrawCommand, RecordingSurface};
    use embedded_graphics::mock_display::MockDisplay;

    use crate::surface::GraphicsSurface;

    fn noon() -> BrokenDownTime {
        BrokenDownTime::from_civil(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn fonts() -> Fonts {
        Fonts::load("font-5x7", "font-7x14").unwrap()
    }

    fn band(y: i32) -> Rectangle {
        Rectangle::new(Point::new(0, y), Size::new(64, 21))
    }

    #[test]
    fn splits_region_one_to_two() {
        let region = Rectangle::new(Point::new(0, 56), Size::new(144, 56));
        assert_eq!(name_area(&region), Rectangle::new(Point::new(0, 56), Size::new(144, 18)));
        assert_eq!(time_area(&region), Rectangle::new(Point::new(0, 74), Size::new(144, 37)));
    }

    #[test]
    fn day_zone_commands() {
        let zone = Zone::new("London", 0, band(21));
        let reading = compute_zone_local_time(&noon(), -300, 0);
        let mut surface = RecordingSurface::default();

        render_zone(&mut surface, &zone, &reading, &fonts()).unwrap();

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Fill(band(21), BinaryColor::On),
                DrawCommand::Text(
                    "London".into(),
                    FontHandle::Small5x7,
                    Rectangle::new(Point::new(0, 21), Size::new(64, 7)),
                    BinaryColor::Off
                ),
                DrawCommand::Text(
                    "17:00".into(),
                    FontHandle::Medium7x14,
                    Rectangle::new(Point::new(0, 28), Size::new(64, 14)),
                    BinaryColor::Off
                ),
            ]
        );
    }

    #[test]
    fn night_zone_is_inverted() {
        let zone = Zone::new("India", 330, band(42));
        let reading = compute_zone_local_time(&noon(), -300, 330);
        let mut surface = RecordingSurface::default();

        render_zone(&mut surface, &zone, &reading, &fonts()).unwrap();

        assert_eq!(surface.commands[0], DrawCommand::Fill(band(42), BinaryColor::Off));
        assert!(matches!(
            &surface.commands[2],
            DrawCommand::Text(text, _, _, BinaryColor::On) if text == "22:30"
        ));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let zone = Zone::new("New York", -300, band(0));
        let reading = compute_zone_local_time(&noon(), -300, -300);

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render_zone(&mut first, &zone, &reading, &fonts()).unwrap();
        render_zone(&mut second, &zone, &reading, &fonts()).unwrap();

        assert_eq!(first.commands, second.commands);
    }

    #[test]
    fn draws_onto_mock_display() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);

        let sample = noon();
        let london = Zone::new("London", 0, band(0));
        let india = Zone::new("India", 330, band(21));
        let mut surface = GraphicsSurface::new(&mut display);
        for zone in [&london, &india] {
            let reading = compute_zone_local_time(&sample, -300, zone.offset());
            render_zone(&mut surface, zone, &reading, &fonts()).unwrap();
        }

        // Corners keep the background: white for London's day, black for India's night.
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(63, 20)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(0, 21)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(63, 41)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(0, 42)), None);
    }
}
