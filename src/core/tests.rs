#[cfg(test)]
mod tests {
    use crate::core::{Clock, FixedClock, Greeting, MenuState, NAVIGATION};

    /// What the home page does on mount: read the clock once, keep the result.
    fn mount_greeting(clock: &impl Clock) -> Greeting {
        Greeting::from_clock(clock)
    }

    #[test]
    fn test_mount_at_nine_greets_morning() {
        let greeting = mount_greeting(&FixedClock(9));
        assert_eq!(greeting.text(), "Good Morning, World!");
    }

    #[test]
    fn test_mount_at_twenty_greets_evening() {
        let greeting = mount_greeting(&FixedClock(20));
        assert_eq!(greeting.text(), "Good Evening, World!");
    }

    #[test]
    fn test_greeting_is_fixed_after_mount() {
        let greeting = mount_greeting(&FixedClock(11));

        // A later reading only matters to a fresh mount
        assert_eq!(mount_greeting(&FixedClock(19)), Greeting::Evening);
        assert_eq!(greeting, Greeting::Morning);
    }

    #[test]
    fn test_open_menu_then_follow_link() {
        // Activating any link collapses the panel
        for item in NAVIGATION {
            let mut menu = MenuState::new();
            menu.toggle();
            assert!(menu.is_open(), "before {}", item.name);
            menu.close();
            assert!(!menu.is_open(), "after {}", item.name);
        }
    }

    #[test]
    fn test_menu_and_greeting_are_independent() {
        let mut menu = MenuState::new();
        let before = Greeting::from_clock(&FixedClock(13));
        menu.toggle();
        menu.close();
        let after = Greeting::from_clock(&FixedClock(13));
        assert_eq!(before, after);
        assert_eq!(after, Greeting::Afternoon);
    }
}
