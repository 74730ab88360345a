//! Font resources available to the watch face.
//!
//! Faces name their fonts by resource id, the way a firmware image bundles
//! them. Loading resolves the id to one of the built-in mono fonts.

use embedded_graphics::mono_font::{
    ascii::{FONT_10X20, FONT_5X7, FONT_6X10, FONT_7X14, FONT_9X15_BOLD},
    MonoFont,
};

use crate::error::WatchError;

/// A loaded font resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontHandle {
    Small5x7,
    Regular6x10,
    Medium7x14,
    Bold9x15,
    Large10x20,
}

const RESOURCES: [(&str, FontHandle); 5] = [
    ("font-5x7", FontHandle::Small5x7),
    ("font-6x10", FontHandle::Regular6x10),
    ("font-7x14", FontHandle::Medium7x14),
    ("font-9x15-bold", FontHandle::Bold9x15),
    ("font-10x20", FontHandle::Large10x20),
];

impl FontHandle {
    pub fn load(resource: &'static str) -> Result<Self, WatchError> {
        RESOURCES
            .iter()
            .find(|(name, _)| *name == resource)
            .map(|&(_, handle)| handle)
            .ok_or(WatchError::FontUnavailable(resource))
    }

    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            FontHandle::Small5x7 => &FONT_5X7,
            FontHandle::Regular6x10 => &FONT_6X10,
            FontHandle::Medium7x14 => &FONT_7X14,
            FontHandle::Bold9x15 => &FONT_9X15_BOLD,
            FontHandle::Large10x20 => &FONT_10X20,
        }
    }
}

/// The two fonts a face draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fonts {
    /// Zone names.
    pub name: FontHandle,
    /// The `HH:MM` time.
    pub time: FontHandle,
}

impl Fonts {
    pub fn load(name: &'static str, time: &'static str) -> Result<Self, WatchError> {
        let fonts = Fonts {
            name: FontHandle::load(name)?,
            time: FontHandle::load(time)?,
        };
        debug!("loaded fonts {} and {}", name, time);
        Ok(fonts)
    }

    pub fn unload(self) {
        debug!("fonts released");
    }
}
