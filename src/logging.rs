// Not every macro is used by every feature combination.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(defmt::error!($($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(defmt::warn!($($tt)*)) }
}

macro_rules! info {
    ($($tt:tt)*) => { log!(defmt::info!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(defmt::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(defmt::trace!($($tt)*)) }
}
