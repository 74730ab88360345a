//! Calendar arithmetic: Julian day numbers, Unix epoch seconds and an
//! approximate lunar phase.
//!
//! Every function that reads month or day fields checks them first and
//! returns [`CalendarError::InvalidCalendarField`] when they are out of
//! range. Day-of-month is checked against 1 - 31 only.

use crate::clock::BrokenDownTime;
use crate::error::{CalendarError, CalendarField};

/// Continuous count of days since the astronomical Julian epoch.
pub type JulianDayNumber = u32;

/// Lunar phase in hundredths of a day since the last new moon, `0..=2953`.
pub type MoonPhaseIndex = u32;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Synodic month (29.53 days) in hundredths of a day.
pub const SYNODIC_MONTH_CENTIDAYS: u32 = 2953;

/// Index of a full moon, half a synodic month after the new moon.
pub const MOON_PHASE_FULL: MoonPhaseIndex = SYNODIC_MONTH_CENTIDAYS / 2;

/// Julian day of the new moon of 2000-01-06.
pub const REFERENCE_NEW_MOON: JulianDayNumber = 2_451_550;

/// 1970, in years since 1900.
const UNIX_EPOCH_YEAR: u32 = 70;

const MONTH_START_OFFSET: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Leap years in `1..year`.
fn leap_years_before(year: u32) -> u32 {
    let y = year.saturating_sub(1);
    y / 4 - y / 100 + y / 400
}

/// Days from 1900-01-01 to January 1 of `1900 + year`.
pub fn days_since_epoch_base(year: u32) -> u32 {
    let base = BrokenDownTime::YEAR_BASE;
    365 * year + leap_years_before(base + year) - leap_years_before(base)
}

pub(crate) fn check_month_day(month: u8, day: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidCalendarField {
            field: CalendarField::Month,
            value: u32::from(month),
        });
    }
    if !(1..=31).contains(&day) {
        return Err(CalendarError::InvalidCalendarField {
            field: CalendarField::Day,
            value: u32::from(day),
        });
    }
    Ok(())
}

/// Zero-based day of the year; January 1 is day 0.
pub fn day_of_year(year: u32, month: u8, day: u8) -> Result<u32, CalendarError> {
    check_month_day(month, day)?;

    let mut ordinal = MONTH_START_OFFSET[usize::from(month - 1)] + u32::from(day) - 1;
    if month > 2 && is_leap_year(year) {
        ordinal += 1;
    }
    Ok(ordinal)
}

/// Julian Day Number of a Gregorian date. `year` is the full year.
///
/// ```
/// assert_eq!(tz_watch::calendar::julian_day(2000, 1, 1), Ok(2_451_545));
/// ```
pub fn julian_day(year: u32, month: u8, day: u8) -> Result<JulianDayNumber, CalendarError> {
    check_month_day(month, day)?;

    let month = u32::from(month);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    Ok(u32::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045)
}

pub fn julian_day_from_broken_down(time: &BrokenDownTime) -> Result<JulianDayNumber, CalendarError> {
    julian_day(time.full_year(), time.month, time.day)
}

/// Day of the week for a Julian day, 0 = Sunday.
pub fn weekday_from_julian_day(jdn: JulianDayNumber) -> u8 {
    ((jdn + 1) % 7) as u8
}

/// Unix epoch seconds of `time` read as local civil time at
/// `gmt_offset_seconds` east of GMT (New York standard time is `-5 * 3600`).
///
/// The time must already be fully resolved: this does not roll fields that
/// another zone's offset pushed past midnight.
pub fn unix_epoch_seconds(time: &BrokenDownTime, gmt_offset_seconds: i32) -> Result<u32, CalendarError> {
    time.validate()?;

    let days = i64::from(days_since_epoch_base(u32::from(time.year)))
        - i64::from(days_since_epoch_base(UNIX_EPOCH_YEAR))
        + i64::from(day_of_year(time.full_year(), time.month, time.day)?);

    let seconds = days * i64::from(SECONDS_PER_DAY)
        + i64::from(time.hour) * 3600
        + i64::from(time.minute) * 60
        + i64::from(time.second)
        - i64::from(gmt_offset_seconds);

    u32::try_from(seconds).map_err(|_| CalendarError::EpochOutOfRange)
}

/// Approximate phase of the moon for the date of `time`.
///
/// Linear in elapsed days since a known new moon, modulo a fixed 29.53 day
/// synodic month, at whole-day resolution. Good to a day or two over
/// several years; it ignores the real variation of the lunar orbit.
pub fn moon_phase(time: &BrokenDownTime) -> Result<MoonPhaseIndex, CalendarError> {
    julian_day_from_broken_down(time).map(moon_phase_from_julian_day)
}

pub fn moon_phase_from_julian_day(jdn: JulianDayNumber) -> MoonPhaseIndex {
    let elapsed = i64::from(jdn) - i64::from(REFERENCE_NEW_MOON);
    (elapsed * 100).rem_euclid(i64::from(SYNODIC_MONTH_CENTIDAYS)) as MoonPhaseIndex
}

/// Distance between two phase indices going the short way around the cycle.
pub fn moon_phase_distance(a: MoonPhaseIndex, b: MoonPhaseIndex) -> u32 {
    let diff = a.abs_diff(b) % SYNODIC_MONTH_CENTIDAYS;
    diff.min(SYNODIC_MONTH_CENTIDAYS - diff)
}
