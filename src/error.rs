use core::fmt;

/// A field of a broken-down time, named in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarField {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Weekday,
}

impl CalendarField {
    pub fn name(self) -> &'static str {
        match self {
            CalendarField::Month => "month",
            CalendarField::Day => "day",
            CalendarField::Hour => "hour",
            CalendarField::Minute => "minute",
            CalendarField::Second => "second",
            CalendarField::Weekday => "weekday",
        }
    }
}

/// Errors from the calendar and time arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    /// A calendar field is outside its valid range.
    InvalidCalendarField { field: CalendarField, value: u32 },
    /// The instant cannot be represented as unsigned 32-bit Unix seconds.
    EpochOutOfRange,
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidCalendarField { field, value } => {
                write!(f, "invalid {}: {}", field.name(), value)
            }
            CalendarError::EpochOutOfRange => {
                f.write_str("time is outside the 32-bit unix epoch range")
            }
        }
    }
}

/// Errors raised while bringing up the watch face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchError {
    /// No font resource is registered under this name.
    FontUnavailable(&'static str),
    /// The configuration lists more zones than the face can hold.
    TooManyZones { count: usize, capacity: usize },
    /// The configuration lists no zones at all.
    NoZones,
    /// The initial wall-clock sample is not a valid time.
    Calendar(CalendarError),
}

impl From<CalendarError> for WatchError {
    fn from(err: CalendarError) -> Self {
        WatchError::Calendar(err)
    }
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::FontUnavailable(name) => write!(f, "font resource '{}' not found", name),
            WatchError::TooManyZones { count, capacity } => {
                write!(f, "{} zones configured, at most {} supported", count, capacity)
            }
            WatchError::NoZones => f.write_str("no zones configured"),
            WatchError::Calendar(err) => write!(f, "invalid initial time: {}", err),
        }
    }
}
