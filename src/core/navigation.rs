//! Navigation table and mobile menu controller

/// A top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    /// Icon file stem under `/icons`
    pub icon: &'static str,
}

impl NavItem {
    /// Whether this entry points at the page currently shown.
    ///
    /// The root entry only matches `/` exactly; other entries also match their
    /// sub-paths and a trailing slash.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.href == "/" {
            return current_path == "/";
        }
        match current_path.strip_prefix(self.href) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Site navigation, in display order
pub const NAVIGATION: [NavItem; 2] = [
    NavItem {
        name: "Home",
        href: "/",
        icon: "home",
    },
    NavItem {
        name: "About",
        href: "/about",
        icon: "info",
    },
];

/// Open/closed state of the mobile navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the panel between open and closed
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Collapse the panel. Called whenever a navigation link is activated.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Animation target for the rendering layer
    pub fn animation(&self) -> MenuAnimation {
        if self.is_open {
            MenuAnimation::EXPANDED
        } else {
            MenuAnimation::COLLAPSED
        }
    }
}

/// Target height/opacity of the mobile panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnimation {
    /// `true` for natural height, `false` for zero height
    pub expanded: bool,
    pub opacity: f32,
}

impl MenuAnimation {
    pub const EXPANDED: Self = Self {
        expanded: true,
        opacity: 1.0,
    };
    pub const COLLAPSED: Self = Self {
        expanded: false,
        opacity: 0.0,
    };

    /// Inline style consumed by the CSS transition on the panel
    pub fn style(&self) -> String {
        let max_height = if self.expanded { "24rem" } else { "0" };
        format!("max-height: {max_height}; opacity: {};", self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // MenuState
    // ========================================================================

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::new().is_open());
        assert_eq!(MenuState::new(), MenuState::default());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_from_any_state() {
        let mut open = MenuState::new();
        open.toggle();
        open.close();
        assert!(!open.is_open());

        let mut closed = MenuState::new();
        closed.close();
        assert!(!closed.is_open());
        closed.close();
        assert!(!closed.is_open());
    }

    #[test]
    fn test_animation_follows_state() {
        let mut menu = MenuState::new();
        assert_eq!(menu.animation(), MenuAnimation::COLLAPSED);
        menu.toggle();
        assert_eq!(menu.animation(), MenuAnimation::EXPANDED);
    }

    #[test]
    fn test_animation_style() {
        assert_eq!(
            MenuAnimation::COLLAPSED.style(),
            "max-height: 0; opacity: 0;"
        );
        assert_eq!(
            MenuAnimation::EXPANDED.style(),
            "max-height: 24rem; opacity: 1;"
        );
    }

    // ========================================================================
    // NavItem
    // ========================================================================

    #[test]
    fn test_navigation_table() {
        let hrefs: Vec<_> = NAVIGATION.iter().map(|item| item.href).collect();
        assert_eq!(hrefs, vec!["/", "/about"]);
        assert_eq!(NAVIGATION[0].name, "Home");
        assert_eq!(NAVIGATION[1].name, "About");
    }

    #[test]
    fn test_home_is_active_only_on_root() {
        let home = NAVIGATION[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
        assert!(!home.is_active(""));
    }

    #[test]
    fn test_about_matches_sub_paths() {
        let about = NAVIGATION[1];
        assert!(about.is_active("/about"));
        assert!(about.is_active("/about/"));
        assert!(about.is_active("/about/team"));
        assert!(!about.is_active("/aboutus"));
        assert!(!about.is_active("/"));
    }
}
