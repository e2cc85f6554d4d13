use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::HotkeyError;

/// A favorite hotkey slot, always in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct HotkeySlot(u8);

impl HotkeySlot {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Returns the slot for `digit`, or `None` outside `1..=9`.
    pub fn new(digit: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&digit).then_some(Self(digit))
    }

    pub fn digit(self) -> u8 {
        self.0
    }

    /// All nine slots in ascending order.
    pub fn all() -> impl Iterator<Item = HotkeySlot> {
        (Self::MIN..=Self::MAX).map(HotkeySlot)
    }
}

impl TryFrom<i64> for HotkeySlot {
    type Error = HotkeyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(HotkeySlot::new)
            .ok_or(HotkeyError::InvalidSlot(value))
    }
}

impl From<HotkeySlot> for u8 {
    fn from(slot: HotkeySlot) -> u8 {
        slot.0
    }
}

impl fmt::Display for HotkeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a hotkey activation resolved to, before any side effect runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Activation {
    /// Copy `url` of the favorite bound to `slot`.
    Copy {
        slot: HotkeySlot,
        url: String,
        title: String,
    },
    /// Nothing usable is bound to `slot`.
    NotAssigned { slot: HotkeySlot },
}

impl Activation {
    pub fn slot(&self) -> HotkeySlot {
        match self {
            Activation::Copy { slot, .. } | Activation::NotAssigned { slot } => *slot,
        }
    }

    /// Body of the desktop notification shown for this activation.
    pub fn message(&self) -> String {
        match self {
            Activation::Copy { slot, .. } => format!("Favorite {} copied to clipboard!", slot),
            Activation::NotAssigned { slot } => format!("Favorite {} not assigned!", slot),
        }
    }
}
