//! Three clocks for three time zones on a small monochrome display.
//!
//! The library holds the time arithmetic and the watch face itself; the
//! `pico` feature builds the RP2040 firmware that drives it.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

pub mod calendar;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod face;
pub mod fonts;
pub mod surface;

#[cfg(test)]
mod testing;

pub use clock::{compute_zone_local_time, BrokenDownTime, DayPhase, TimezoneOffset, ZoneReading};
pub use error::{CalendarError, CalendarField, WatchError};
pub use face::{WatchApp, WatchFace, Zone};
pub use surface::{GraphicsSurface, Surface};
