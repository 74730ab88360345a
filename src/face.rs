use embedded_graphics::{prelude::*, primitives::Rectangle};
use heapless::Vec;

use crate::clock::{compute_zone_local_time, BrokenDownTime, TimezoneOffset, ZoneReading};
use crate::config::FaceConfig;
use crate::display::render_zone;
use crate::error::{CalendarError, WatchError};
use crate::fonts::Fonts;
use crate::surface::Surface;

/// Most zones a face can show.
pub const MAX_ZONES: usize = 4;

/// A named clock and the band of the screen it is drawn in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    name: &'static str,
    offset: TimezoneOffset,
    region: Rectangle,
    dirty: bool,
}

impl Zone {
    /// A new zone starts dirty so the first pass draws it.
    pub fn new(name: &'static str, offset: TimezoneOffset, region: Rectangle) -> Self {
        Self {
            name,
            offset,
            region,
            dirty: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn offset(&self) -> TimezoneOffset {
        self.offset
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Band `index` of `count` equal horizontal bands across `screen`.
pub fn zone_region(screen: Size, count: usize, index: usize) -> Rectangle {
    let height = screen.height / count.max(1) as u32;
    Rectangle::new(
        Point::new(0, (index as u32 * height) as i32),
        Size::new(screen.width, height),
    )
}

/// The lifecycle the host drives: init once, a tick every minute, a draw
/// pass whenever the host is ready to paint, deinit at shutdown.
pub trait WatchApp: Sized {
    fn init(config: &FaceConfig, now: BrokenDownTime) -> Result<Self, WatchError>;

    /// Stores a new wall-clock sample and marks every zone dirty.
    fn on_tick(&mut self, sample: BrokenDownTime) -> Result<(), CalendarError>;

    /// Draws every dirty zone and returns how many were drawn.
    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<usize, S::Error>;

    fn deinit(self);
}

/// Several clocks for different time zones, each in its own band of the
/// screen, all derived from one wall-clock sample.
#[derive(Debug)]
pub struct WatchFace {
    home_offset: TimezoneOffset,
    zones: Vec<Zone, MAX_ZONES>,
    sample: BrokenDownTime,
    fonts: Fonts,
}

impl WatchFace {
    pub fn home_offset(&self) -> TimezoneOffset {
        self.home_offset
    }

    pub fn sample(&self) -> &BrokenDownTime {
        &self.sample
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    /// Local time of zone `index` for the current sample.
    pub fn reading(&self, index: usize) -> Option<ZoneReading> {
        self.zones
            .get(index)
            .map(|zone| compute_zone_local_time(&self.sample, self.home_offset, zone.offset))
    }

    /// Local time of every zone, in configuration order.
    pub fn readings(&self) -> impl Iterator<Item = ZoneReading> + '_ {
        self.zones
            .iter()
            .map(move |zone| compute_zone_local_time(&self.sample, self.home_offset, zone.offset))
    }

    pub fn is_dirty(&self) -> bool {
        self.zones.iter().any(Zone::is_dirty)
    }

    pub fn dirty_regions(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.zones.iter().filter(|zone| zone.dirty).map(Zone::region)
    }

    pub fn mark_all_dirty(&mut self) {
        for zone in self.zones.iter_mut() {
            zone.dirty = true;
        }
    }
}

impl WatchApp for WatchFace {
    fn init(config: &FaceConfig, now: BrokenDownTime) -> Result<Self, WatchError> {
        let count = config.zones.len();
        if count == 0 {
            return Err(WatchError::NoZones);
        }
        if count > MAX_ZONES {
            return Err(WatchError::TooManyZones {
                count,
                capacity: MAX_ZONES,
            });
        }
        now.validate()?;

        let fonts = Fonts::load(config.name_font, config.time_font)?;

        let mut zones = Vec::new();
        for (index, zone) in config.zones.iter().enumerate() {
            let region = zone_region(config.screen, count, index);
            if zones.push(Zone::new(zone.name, zone.offset, region)).is_err() {
                return Err(WatchError::TooManyZones {
                    count,
                    capacity: MAX_ZONES,
                });
            }
        }

        info!("{} zones, home offset {} min", count, config.home_offset);
        Ok(WatchFace {
            home_offset: config.home_offset,
            zones,
            sample: now,
            fonts,
        })
    }

    fn on_tick(&mut self, sample: BrokenDownTime) -> Result<(), CalendarError> {
        if let Err(err) = sample.validate() {
            warn!("ignoring tick: {}", err);
            return Err(err);
        }

        self.sample = sample;
        self.mark_all_dirty();
        trace!("tick {=u8}:{=u8}", sample.hour, sample.minute);
        Ok(())
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<usize, S::Error> {
        let mut drawn = 0;
        for zone in self.zones.iter_mut().filter(|zone| zone.dirty) {
            let reading = compute_zone_local_time(&self.sample, self.home_offset, zone.offset);
            render_zone(surface, zone, &reading, &self.fonts)?;
            zone.dirty = false;
            drawn += 1;
        }
        Ok(drawn)
    }

    fn deinit(self) {
        self.fonts.unload();
        debug!("watch face shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, ZoneConfig};
    use crate::testing::{DrawCommand, RecordingSurface};
    use embedded_graphics::pixelcolor::BinaryColor;

    fn at(hour: u8, minute: u8) -> BrokenDownTime {
        BrokenDownTime::from_civil(2024, 3, 15, hour, minute, 0).unwrap()
    }

    fn reference(now: BrokenDownTime) -> WatchFace {
        WatchFace::init(&config::REFERENCE, now).unwrap()
    }

    #[test]
    fn init_lays_out_bands() {
        let face = reference(at(12, 0));
        let regions: std::vec::Vec<_> = face.zones().iter().map(Zone::region).collect();
        assert_eq!(
            regions,
            [
                Rectangle::new(Point::new(0, 0), Size::new(128, 21)),
                Rectangle::new(Point::new(0, 21), Size::new(128, 21)),
                Rectangle::new(Point::new(0, 42), Size::new(128, 21)),
            ]
        );
        assert!(face.is_dirty());
        assert_eq!(face.dirty_regions().count(), 3);
    }

    #[test]
    fn init_rejects_bad_configs() {
        const NONE: FaceConfig = FaceConfig {
            zones: &[],
            ..config::REFERENCE
        };
        assert_eq!(WatchFace::init(&NONE, at(12, 0)).err(), Some(WatchError::NoZones));

        const CROWDED: FaceConfig = FaceConfig {
            zones: &[
                ZoneConfig::new("A", 0),
                ZoneConfig::new("B", 60),
                ZoneConfig::new("C", 120),
                ZoneConfig::new("D", 180),
                ZoneConfig::new("E", 240),
            ],
            ..config::REFERENCE
        };
        assert_eq!(
            WatchFace::init(&CROWDED, at(12, 0)).err(),
            Some(WatchError::TooManyZones {
                count: 5,
                capacity: MAX_ZONES
            })
        );

        const NO_FONT: FaceConfig = FaceConfig {
            time_font: "arial-black-30",
            ..config::REFERENCE
        };
        assert_eq!(
            WatchFace::init(&NO_FONT, at(12, 0)).err(),
            Some(WatchError::FontUnavailable("arial-black-30"))
        );

        let mut bad = at(12, 0);
        bad.month = 0;
        assert!(matches!(
            WatchFace::init(&config::REFERENCE, bad),
            Err(WatchError::Calendar(_))
        ));
    }

    #[test]
    fn draw_clears_dirty_and_tick_marks_again() {
        let mut face = reference(at(12, 0));
        let mut surface = RecordingSurface::default();

        assert_eq!(face.draw(&mut surface), Ok(3));
        assert!(!face.is_dirty());
        assert_eq!(face.draw(&mut surface), Ok(0));
        assert_eq!(surface.commands.len(), 9);

        face.on_tick(at(12, 1)).unwrap();
        assert!(face.is_dirty());
        assert_eq!(face.draw(&mut surface), Ok(3));
    }

    #[test]
    fn reference_zones_at_new_york_noon() {
        let face = reference(at(12, 0));
        let times: std::vec::Vec<_> = face
            .readings()
            .map(|r| (r.time.hour, r.time.minute, r.is_night()))
            .collect();
        assert_eq!(times, [(12, 0, false), (17, 0, false), (22, 30, true)]);
    }

    #[test]
    fn zones_do_not_interfere() {
        let sample = at(23, 45);
        let face = reference(sample);

        // New York 23:45, London five hours on, India ten and a half.
        let expected = [(23, 45, true), (4, 45, true), (10, 15, false)];
        for (index, reading) in face.readings().enumerate() {
            let (hour, minute, night) = expected[index];
            assert_eq!((reading.time.hour, reading.time.minute), (hour, minute), "zone {}", index);
            assert_eq!(reading.is_night(), night, "zone {}", index);
            assert_eq!(reading.time.day, sample.day);
            assert_eq!(face.reading(index), Some(reading));
        }
        assert_eq!(face.readings().count(), expected.len());
        assert_eq!(face.sample(), &sample);
    }

    #[test]
    fn draw_pass_leaves_sample_untouched() {
        let sample = at(5, 50);
        let mut face = reference(sample);
        face.draw(&mut RecordingSurface::default()).unwrap();
        assert_eq!(face.sample(), &sample);
    }

    #[test]
    fn invalid_tick_keeps_previous_sample() {
        let mut face = reference(at(12, 0));
        face.draw(&mut RecordingSurface::default()).unwrap();

        let mut bad = at(12, 1);
        bad.minute = 61;
        assert!(face.on_tick(bad).is_err());
        assert_eq!(face.sample(), &at(12, 0));
        assert!(!face.is_dirty());
    }

    #[test]
    fn tick_is_a_plain_overwrite() {
        let mut face = reference(at(12, 0));
        face.on_tick(at(3, 10)).unwrap();
        face.on_tick(at(3, 10)).unwrap();
        assert_eq!(face.sample(), &at(3, 10));
        assert_eq!(face.reading(0).map(|r| r.time.hour), Some(3));
    }

    #[test]
    fn colors_follow_each_zone() {
        let mut face = reference(at(12, 0));
        let mut surface = RecordingSurface::default();
        face.draw(&mut surface).unwrap();

        let fills: std::vec::Vec<_> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, [BinaryColor::On, BinaryColor::On, BinaryColor::Off]);
    }

    #[test]
    fn deinit_consumes_face() {
        let face = reference(at(12, 0));
        face.deinit();
    }
}
