use crate::ui::icon::Icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Default,
    Secondary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Full class list for a button
pub(crate) fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    [
        "btn-base",
        variant.class(),
        size.class(),
        extra.trim(),
    ]
    .into_iter()
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Type-safe button component with variants and sizes.
///
/// With `href` set the button renders as a router link, otherwise as a
/// `<button>` that runs `on_click`.
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Navigate to this path instead of running a handler
    #[prop(optional)]
    href: Option<&'static str>,
    /// Accessible label, for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Expanded state of the element this button controls
    #[prop(optional)]
    aria_expanded: Option<Signal<bool>>,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let full_classes = button_classes(variant, size, &class);

    let icon_view = icon.map(|icon_name| {
        view! { <Icon name=icon_name class="w-4 h-4"/> }
    });

    match href {
        Some(href) => view! {
            <A href=href attr:class=full_classes>
                {icon_view}
                {children()}
            </A>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=full_classes
                aria-label=aria_label
                aria-expanded=move || aria_expanded.map(|expanded| expanded.get().to_string())
                on:click=move |_| {
                    if let Some(on_click) = &on_click {
                        on_click.run(())
                    }
                }
            >
                {icon_view}
                {children()}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_medium_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Default, ButtonSize::Medium, ""),
            "btn-base btn-default"
        );
    }

    #[test]
    fn test_size_and_extra_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Large, " gap-2 "),
            "btn-base btn-outline btn-lg gap-2"
        );
        assert_eq!(
            button_classes(ButtonVariant::Ghost, ButtonSize::Small, "p-2"),
            "btn-base btn-ghost btn-sm p-2"
        );
    }
}
