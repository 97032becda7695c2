use leptos::prelude::*;

/// Badge variant types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    /// Solid accent badge
    Default,
    /// Muted background badge
    Secondary,
    /// Border only
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

pub(crate) fn badge_classes(variant: BadgeVariant, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("badge {}", variant.class())
    } else {
        format!("badge {} {}", variant.class(), extra)
    }
}

/// Badge component for short labels such as technology names
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    view! {
        <span class=badge_classes(variant, &class)>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(
            badge_classes(BadgeVariant::Default, ""),
            "badge badge-default"
        );
        assert_eq!(
            badge_classes(BadgeVariant::Secondary, "text-sm"),
            "badge badge-secondary text-sm"
        );
        assert_eq!(
            badge_classes(BadgeVariant::Outline, "   "),
            "badge badge-outline"
        );
    }
}
