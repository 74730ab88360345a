use crate::calendar;
use crate::error::{CalendarError, CalendarField};

/// Minutes east of GMT. New York standard time is `-300`.
pub type TimezoneOffset = i32;

/// Civil time as delivered by the host's real-time clock.
///
/// Copied by value everywhere; zone adjustments produce a new value rather
/// than editing the sample they were derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrokenDownTime {
    /// Years since 1900.
    pub year: u16,
    /// 1 - 12
    pub month: u8,
    /// 1 - 31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Days since Sunday.
    pub weekday: u8,
}

impl BrokenDownTime {
    /// Calendar year that `year == 0` refers to.
    pub const YEAR_BASE: u32 = 1900;

    /// Builds a validated time from a full calendar year, deriving the weekday.
    pub fn from_civil(
        full_year: u32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        let year = full_year
            .checked_sub(Self::YEAR_BASE)
            .and_then(|y| u16::try_from(y).ok())
            .ok_or(CalendarError::EpochOutOfRange)?;

        let jdn = calendar::julian_day(full_year, month, day)?;
        let time = BrokenDownTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: calendar::weekday_from_julian_day(jdn),
        };
        time.validate()?;
        Ok(time)
    }

    pub fn full_year(&self) -> u32 {
        Self::YEAR_BASE + u32::from(self.year)
    }

    /// Checks every field against its range. Day-of-month is only checked
    /// against 1 - 31, not against the length of the month.
    pub fn validate(&self) -> Result<(), CalendarError> {
        calendar::check_month_day(self.month, self.day)?;
        check_range(CalendarField::Hour, self.hour, 23)?;
        check_range(CalendarField::Minute, self.minute, 59)?;
        check_range(CalendarField::Second, self.second, 59)?;
        check_range(CalendarField::Weekday, self.weekday, 6)
    }
}

fn check_range(field: CalendarField, value: u8, max: u8) -> Result<(), CalendarError> {
    if value > max {
        return Err(CalendarError::InvalidCalendarField {
            field,
            value: u32::from(value),
        });
    }
    Ok(())
}

/// Whether a zone is drawn in day or night colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    /// First hour drawn as day.
    pub const DAWN_HOUR: u8 = 6;
    /// Last hour drawn as day.
    pub const DUSK_HOUR: u8 = 18;

    pub fn from_hour(hour: u8) -> Self {
        if hour > Self::DUSK_HOUR || hour < Self::DAWN_HOUR {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }

    pub fn is_night(self) -> bool {
        self == DayPhase::Night
    }
}

/// A zone's local time, derived from the shared wall-clock sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneReading {
    pub time: BrokenDownTime,
    pub phase: DayPhase,
}

impl ZoneReading {
    pub fn is_night(&self) -> bool {
        self.phase.is_night()
    }

    /// Formats the reading as `HH:MM` into `buf`.
    pub fn hhmm<'a>(&self, buf: &'a mut [u8; 8]) -> &'a str {
        format_no_std::show(
            buf,
            format_args!("{:02}:{:02}", self.time.hour, self.time.minute),
        )
        .unwrap_or("--:--")
    }
}

/// Derives a zone's local hour and minute from the home-zone sample.
///
/// `delta = zone_offset - home_offset`. The sub-hour part of the delta is
/// added to the minute with a single carry of one hour, then the whole hours
/// are added and the hour is wrapped into `0..24`. The sub-hour part is
/// always within 59 minutes, so one carry keeps the minute in `0..60`.
///
/// The date fields of the result are those of `sample`; crossing midnight
/// does not roll the day. Use [`crate::calendar::unix_epoch_seconds`] with a
/// fully resolved time when the date matters.
pub fn compute_zone_local_time(
    sample: &BrokenDownTime,
    home_offset: TimezoneOffset,
    zone_offset: TimezoneOffset,
) -> ZoneReading {
    let delta = zone_offset.wrapping_sub(home_offset);

    let mut hour = i32::from(sample.hour);
    let mut minute = i32::from(sample.minute) + delta % 60;
    if minute >= 60 {
        hour += 1;
        minute -= 60;
    } else if minute < 0 {
        hour -= 1;
        minute += 60;
    }

    // UTC-12 to UTC+14 is 26 hours apart, more than one wrap.
    hour = (hour + (delta / 60) % 24).rem_euclid(24);

    let time = BrokenDownTime {
        hour: hour as u8,
        minute: minute as u8,
        ..*sample
    };

    ZoneReading {
        time,
        phase: DayPhase::from_hour(time.hour),
    }
}
