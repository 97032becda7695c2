//! Core behavior of the site: the navigation menu controller and the greeting selector

pub mod clock;
#[cfg(feature = "ssr")]
pub mod config;
pub mod greeting;
pub mod navigation;
#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, LocalClock};
pub use greeting::{Greeting, GreetingError, Hour, compute_greeting};
pub use navigation::{MenuAnimation, MenuState, NAVIGATION, NavItem};
