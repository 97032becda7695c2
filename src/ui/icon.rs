//! SVG icons served from `public/icons`
//!
//! Icons here are decorative: every place that shows one also shows a text
//! label or has its own `aria-label`, so the image is hidden from assistive tech.

use leptos::prelude::*;

/// Public URL of an icon by file stem
pub fn icon_src(name: &str) -> String {
    format!("/icons/{name}.svg")
}

#[component]
pub fn Icon(
    name: &'static str,
    /// Size and color classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=icon_src(name)
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names used by the pages and layout
pub mod icons {
    pub const INFO: &str = "info";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const HEART: &str = "heart";
    pub const CODE: &str = "code";
    pub const PALETTE: &str = "palette";
    pub const SUN: &str = "sun";
    pub const STAR: &str = "star";
    pub const SPARKLES: &str = "sparkles";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NAVIGATION;
    use std::path::Path;

    fn shipped(name: &str) -> bool {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public/icons")
            .join(format!("{name}.svg"))
            .is_file()
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(icon_src("menu"), "/icons/menu.svg");
        assert_eq!(icon_src("arrow-left"), "/icons/arrow-left.svg");
    }

    #[test]
    fn test_named_icons_are_shipped() {
        for name in [
            icons::INFO,
            icons::MENU,
            icons::X,
            icons::ARROW_LEFT,
            icons::HEART,
            icons::CODE,
            icons::PALETTE,
            icons::SUN,
            icons::STAR,
            icons::SPARKLES,
        ] {
            assert!(shipped(name), "missing public/icons/{name}.svg");
        }
    }

    #[test]
    fn test_navigation_icons_are_shipped() {
        for item in NAVIGATION {
            assert!(shipped(item.icon), "missing icon for {}", item.name);
        }
    }
}
