//! Page entrance animations
//!
//! Every page body is wrapped in [`PageTransition`]. Pages are mounted fresh on
//! each navigation, so the entrance animation replays whenever the route changes.

use leptos::prelude::*;

/// Inline `animation-delay` for the `index`-th child of a staggered group
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}ms;", index as u64 * step_ms as u64)
}

/// Fade-and-rise wrapper for a page body
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    view! {
        <div class="page-transition">
            {children()}
        </div>
    }
}

/// Keyframes and animation classes shared by all pages
#[component]
pub fn GlobalStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Page entrance */
            @keyframes page-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .page-transition {
                animation: page-enter 0.3s ease-in-out both;
            }

            /* Staggered section entrance */
            @keyframes fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .fade-in-up {
                animation: fade-in-up 0.6s ease-out both;
            }

            /* Badge pop-in */
            @keyframes pop-in {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            .pop-in {
                animation: pop-in 0.3s ease-out both;
            }

            /* Floating background decorations */
            @keyframes float {
                0%, 100% { transform: translateY(-10px) rotate(0deg); }
                33% { transform: translateY(10px) rotate(5deg); }
                66% { transform: translateY(0) rotate(-5deg); }
            }
            .float {
                animation: float 4s ease-in-out infinite;
            }

            /* Mobile menu panel */
            .menu-panel {
                transition: max-height 0.3s ease, opacity 0.3s ease;
            }

            @media (prefers-reduced-motion: reduce) {
                .page-transition, .fade-in-up, .pop-in, .float {
                    animation: none;
                }
                .menu-panel {
                    transition: none;
                }
            }
            "#
        </style>
    }
}
