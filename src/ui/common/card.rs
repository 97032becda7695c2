//! Card container and its sections

use leptos::prelude::*;

fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Rounded, bordered container
#[component]
pub fn Card(
    children: Children,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=with_extra("card", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    children: Children,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=with_extra("card-header", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    children: Children,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <h3 class=with_extra("card-title", &class)>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(
    children: Children,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <p class=with_extra("card-description", &class)>
            {children()}
        </p>
    }
}

#[component]
pub fn CardContent(
    children: Children,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=with_extra("card-content", &class)>
            {children()}
        </div>
    }
}
