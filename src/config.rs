//! Build-time configuration of the watch face.

use embedded_graphics::geometry::Size;

use crate::clock::{BrokenDownTime, TimezoneOffset};

pub const APP_NAME: &str = "Timezones";
pub const APP_AUTHOR: &str = "hudson";
/// (major, minor)
pub const APP_VERSION: (u8, u8) = (1, 0);
pub const APP_UUID: [u8; 16] = [
    0xE6, 0x87, 0x18, 0x07, 0x0E, 0x8A, 0x4F, 0xC2, 0xB6, 0xFF, 0x0E, 0x66, 0xA9, 0xC1, 0x7E, 0xA7,
];

/// SSD1306 panel on the Pico board.
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

/// A zone as it appears in the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneConfig {
    pub name: &'static str,
    pub offset: TimezoneOffset,
}

impl ZoneConfig {
    pub const fn new(name: &'static str, offset: TimezoneOffset) -> Self {
        Self { name, offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceConfig {
    /// GMT offset of the wall clock that delivers ticks, in minutes.
    pub home_offset: TimezoneOffset,
    /// Drawn top to bottom, one equal band each.
    pub zones: &'static [ZoneConfig],
    pub screen: Size,
    /// Font resource for zone names.
    pub name_font: &'static str,
    /// Font resource for the time, larger than `name_font`.
    pub time_font: &'static str,
}

pub const REFERENCE: FaceConfig = FaceConfig {
    home_offset: -5 * 60,
    zones: &[
        ZoneConfig::new("New York", -5 * 60),
        ZoneConfig::new("London", 0),
        ZoneConfig::new("India", 5 * 60 + 30),
    ],
    screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    name_font: "font-5x7",
    time_font: "font-7x14",
};

/// Time the RTC starts from at power-up, in the home zone. There is no time
/// sync, so this is the flash date.
pub const FIRMWARE_START_TIME: BrokenDownTime = BrokenDownTime {
    year: 126,
    month: 10,
    day: 18,
    hour: 12,
    minute: 0,
    second: 0,
    weekday: 0,
};
