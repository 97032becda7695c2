//! Wall-clock access for the greeting selector
//!
//! The greeting only needs the current local hour. It is read through the
//! [`Clock`] trait so pages can use the real clock while tests pin the hour.

/// Source of the current local hour of day
pub trait Clock {
    /// Current hour in local time, expected in `0..=23`
    fn current_hour(&self) -> u32;
}

/// The visitor's local wall clock.
///
/// In the browser this reads `Date.getHours()`, on the server it falls back to
/// the host's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_hour(&self) -> u32 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::new_0().get_hours()
        }
        #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
        {
            use chrono::Timelike;
            chrono::Local::now().hour()
        }
        #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
        {
            0
        }
    }
}

/// A clock stuck at a single hour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}
