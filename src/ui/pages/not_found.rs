//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::transition::PageTransition;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Report a real 404 to the client during server rendering
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Hello World" />

        <PageTransition>
            <div class="min-h-[60vh] flex flex-col items-center justify-center p-4">
                <div class="text-center">
                    // 404 icon
                    <div class="w-24 h-24 mx-auto mb-6 bg-white/70 rounded-full flex items-center justify-center">
                        <Icon name=icons::INFO class="w-12 h-12" />
                    </div>

                    // Error code
                    <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>

                    // Title
                    <h2 class="text-2xl font-semibold text-gray-800 mb-2">
                        "Page Not Found"
                    </h2>

                    // Description
                    <p class="text-gray-600 mb-8 max-w-md mx-auto">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>

                    // Actions
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <Button href="/">"Go Home"</Button>
                        <Button variant=ButtonVariant::Outline href="/about">"About"</Button>
                    </div>
                </div>
            </div>
        </PageTransition>
    }
}
