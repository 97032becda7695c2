pub mod common;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod transition;

pub use icon::{Icon, icons};
pub use layout::Layout;
pub use pages::{AboutPage, HomePage, NotFoundPage};
pub use transition::{GlobalStyles, PageTransition};
