//! Common reusable UI components
//!
//! Buttons, badges and cards shared by the layout and the pages.

pub mod badge;
pub mod button;
pub mod card;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
