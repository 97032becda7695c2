//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page (greeting)
//! - About page
//! - Not found page

mod about;
mod home;
mod not_found;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
