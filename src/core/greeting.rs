//! Time-of-day greeting selector
//!
//! The home page greets visitors according to their local hour. The day is split
//! into three half-open ranges:
//!
//! | Hours        | Greeting                 |
//! |--------------|--------------------------|
//! | `[0, 12)`    | "Good Morning, World!"   |
//! | `[12, 18)`   | "Good Afternoon, World!" |
//! | `[18, 24)`   | "Good Evening, World!"   |
//!
//! The selection happens once per mount; the greeting does not change while the
//! page stays open.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clock::Clock;

/// First hour of the afternoon range
pub const AFTERNOON_START: u32 = 12;
/// First hour of the evening range
pub const EVENING_START: u32 = 18;
/// Last valid hour of the day
pub const LAST_HOUR: u32 = 23;

/// Greeting errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    #[error("Hour out of range: {0} (expected 0..=23)")]
    HourOutOfRange(u32),
}

/// A validated hour of day in `0..=23`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hour(u32);

impl Hour {
    pub fn new(hour: u32) -> Result<Self, GreetingError> {
        if hour > LAST_HOUR {
            return Err(GreetingError::HourOutOfRange(hour));
        }
        Ok(Self(hour))
    }

    /// Clamp any integer into the valid range.
    ///
    /// Hours past the end of the day resolve to the last hour, so a misbehaving
    /// clock still yields the evening greeting instead of an error.
    pub fn clamped(hour: u32) -> Self {
        Self(hour.min(LAST_HOUR))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Hour {
    type Error = GreetingError;

    fn try_from(hour: u32) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

/// The greeting shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Select the greeting for a validated hour
    pub fn for_hour(hour: Hour) -> Self {
        match hour.get() {
            h if h < AFTERNOON_START => Greeting::Morning,
            h if h < EVENING_START => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    /// Read the clock once and select the greeting
    pub fn from_clock(clock: &impl Clock) -> Self {
        compute_greeting(clock.current_hour())
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning, World!",
            Greeting::Afternoon => "Good Afternoon, World!",
            Greeting::Evening => "Good Evening, World!",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Select the greeting for a raw hour value.
///
/// Values above 23 are clamped to 23 and logged.
pub fn compute_greeting(hour: u32) -> Greeting {
    let hour = Hour::new(hour).unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; clamping to {LAST_HOUR}");
        Hour::clamped(hour)
    });
    Greeting::for_hour(hour)
}
