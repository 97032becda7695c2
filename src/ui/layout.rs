//! Shared page chrome: navigation header, main slot and footer

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::{MenuState, NAVIGATION, NavItem};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Layout wrapping every page with the header and footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    // Mobile menu state lives as long as the layout is mounted
    let menu = RwSignal::new(MenuState::new());

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-100">
            <Header menu=menu />

            <main class="flex-1">
                {children()}
            </main>

            <Footer />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(menu: RwSignal<MenuState>) -> impl IntoView {
    let close_menu = move |_: leptos::ev::MouseEvent| menu.update(MenuState::close);

    view! {
        <nav class="bg-white/80 backdrop-blur-md border-b border-gray-200/50 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <A href="/" exact=true attr:class="flex items-center space-x-2" on:click=close_menu>
                        <div class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent
                                    transition-transform hover:scale-105 active:scale-95">
                            "Hello World"
                        </div>
                    </A>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {NAVIGATION
                            .into_iter()
                            .map(|item| view! { <DesktopNavLink item=item menu=menu /> })
                            .collect_view()}
                    </div>

                    // Mobile menu button
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        on_click=Callback::new(move |_| menu.update(MenuState::toggle))
                        aria_label="Toggle navigation menu"
                        aria_expanded=Signal::derive(move || menu.get().is_open())
                        class="p-2 md:hidden"
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </Button>
                </div>

                // Mobile menu
                <div
                    id="mobile-menu"
                    class="md:hidden overflow-hidden menu-panel"
                    style=move || menu.get().animation().style()
                >
                    <div class="py-4 space-y-2 border-t border-gray-200/50">
                        {NAVIGATION
                            .into_iter()
                            .map(|item| view! { <MobileNavLink item=item menu=menu /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn DesktopNavLink(item: NavItem, menu: RwSignal<MenuState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move || item.is_active(&pathname.get());

    // The router link sets aria-current itself; home only matches exactly
    view! {
        <A
            href=item.href
            exact={item.href == "/"}
            attr:class="flex items-center space-x-2 text-gray-600 hover:text-blue-600 transition-colors duration-200"
            on:click=move |_: leptos::ev::MouseEvent| menu.update(MenuState::close)
        >
            <Icon name=item.icon class="w-[18px] h-[18px]" />
            <span class="font-medium" class:text-blue-600=is_active>{item.name}</span>
        </A>
    }
}

#[component]
fn MobileNavLink(item: NavItem, menu: RwSignal<MenuState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move || item.is_active(&pathname.get());

    // The router link sets aria-current itself; home only matches exactly
    view! {
        <A
            href=item.href
            exact={item.href == "/"}
            attr:class="flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-600 hover:text-blue-600 hover:bg-blue-50/50 transition-all duration-200"
            on:click=move |_: leptos::ev::MouseEvent| menu.update(MenuState::close)
        >
            <Icon name=item.icon class="w-5 h-5" />
            <span class="font-medium" class:text-blue-600=is_active>{item.name}</span>
        </A>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white/60 backdrop-blur-sm border-t border-gray-200/50 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center space-y-4 fade-in-up">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                        "Hello World"
                    </div>
                    <p class="text-gray-600 max-w-md mx-auto">
                        "A simple Rust web application built with Leptos, Tailwind CSS and CSS animations."
                    </p>
                    <div class="flex justify-center space-x-6 text-sm text-gray-500">
                        <span>"Built with ❤️ using Leptos"</span>
                        <span>"•"</span>
                        <span>"Styled with Tailwind CSS"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
