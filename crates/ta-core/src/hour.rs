//! Clock-hour model.
//!
//! # Design
//!
//! The entire estimator is keyed on hour-of-day alone — congestion bands,
//! the precomputed table, and alternative departures all resolve to an
//! integer 0–23.  `HourOfDay` is the canonical representation: a checked
//! newtype with wrapping predecessor/successor so `hour ± 1` alternatives
//! roll over midnight correctly (0 → 23, 23 → 0).

use std::fmt;

use crate::AdvisorError;

/// An hour of the day in `0..24`.
///
/// The inner value is private; construct via [`HourOfDay::new`] or
/// [`HourOfDay::parse`] so the 0–23 invariant always holds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const MIDNIGHT: HourOfDay = HourOfDay(0);

    /// Construct from an integer hour; `None` if out of `0..24`.
    #[inline]
    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(HourOfDay(hour)) } else { None }
    }

    /// Construct from an integer hour, wrapping modulo 24.
    ///
    /// Total counterpart of [`new`] for call sites with literal constants.
    ///
    /// [`new`]: HourOfDay::new
    #[inline]
    pub const fn wrapping(hour: u8) -> Self {
        HourOfDay(hour % 24)
    }

    /// The raw hour value, guaranteed `< 24`.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The previous hour, wrapping midnight (0 → 23).
    #[inline]
    pub const fn prev(self) -> HourOfDay {
        HourOfDay(if self.0 == 0 { 23 } else { self.0 - 1 })
    }

    /// The next hour, wrapping midnight (23 → 0).
    #[inline]
    pub const fn next(self) -> HourOfDay {
        HourOfDay(if self.0 == 23 { 0 } else { self.0 + 1 })
    }

    /// Parse a departure-time preference.
    ///
    /// Accepts `"HH:MM"` (minutes are parsed for validity but otherwise
    /// ignored — the engine's resolution is one hour) or a bare `"HH"`.
    pub fn parse(s: &str) -> Result<Self, AdvisorError> {
        let invalid = || AdvisorError::InvalidTime(s.to_string());
        let t = s.trim();

        let hour_part = match t.split_once(':') {
            Some((h, m)) => {
                let minutes: u8 = m.parse().map_err(|_| invalid())?;
                if minutes > 59 {
                    return Err(invalid());
                }
                h
            }
            None => t,
        };

        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        HourOfDay::new(hour).ok_or_else(invalid)
    }
}

impl fmt::Display for HourOfDay {
    /// Renders as a departure time on the hour, e.g. `"07:00"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
