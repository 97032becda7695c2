//! Home page component
//!
//! Greets the visitor according to their local time of day, followed by
//! feature cards, technology badges, a call to action and a stats panel.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{Greeting, LocalClock};
use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader,
    CardTitle,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::transition::{PageTransition, stagger_delay};

/// Technology badges with their color classes
const TECHNOLOGIES: [(&str, &str); 5] = [
    ("Rust", "bg-orange-100 text-orange-800 hover:bg-orange-200"),
    ("Leptos", "bg-amber-100 text-amber-800 hover:bg-amber-200"),
    ("Tailwind CSS", "bg-yellow-100 text-yellow-800 hover:bg-yellow-200"),
    ("Axum", "bg-orange-100 text-orange-800 hover:bg-orange-200"),
    ("WebAssembly", "bg-amber-100 text-amber-800 hover:bg-amber-200"),
];

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    // The visitor's hour is only known in the browser, so the page body stays
    // empty until the mount effect has picked the greeting.
    let greeting = RwSignal::new(None::<Greeting>);

    Effect::new(move |_| {
        greeting.set(Some(Greeting::from_clock(&LocalClock)));
    });

    view! {
        <Title text="Hello World" />

        {move || greeting.get().map(|greeting| view! { <HomeContent greeting=greeting /> })}
    }
}

#[component]
fn HomeContent(greeting: Greeting) -> impl IntoView {
    view! {
        <PageTransition>
            <div class="relative min-h-screen bg-gradient-to-br from-orange-50 via-amber-50 to-yellow-50">
                <FloatingDecorations />

                <div class="relative z-10 container mx-auto px-4 py-16">
                    <div class="max-w-4xl mx-auto text-center">
                        // Main heading
                        <div class="mb-8 fade-in-up" style=stagger_delay(0, 100)>
                            <h1 class="text-6xl md:text-8xl font-bold bg-gradient-to-r from-orange-600 via-amber-600 to-yellow-600 bg-clip-text text-transparent mb-4">
                                {greeting.text()}
                            </h1>
                            <p class="text-xl md:text-2xl text-gray-700 max-w-2xl mx-auto leading-relaxed">
                                "Welcome to our beautiful Rust Hello World application with a warm, light color scheme."
                            </p>
                        </div>

                        // Feature cards
                        <div class="grid md:grid-cols-3 gap-6 mb-12 fade-in-up" style=stagger_delay(1, 100)>
                            <FeatureCard
                                icon=icons::SUN
                                title="Light Theme"
                                description="Beautiful warm colors that are easy on the eyes with excellent readability."
                                border="border-orange-200"
                                accent="text-orange-700"
                            />
                            <FeatureCard
                                icon=icons::SPARKLES
                                title="Modern Design"
                                description="Clean, modern interface built with Leptos, Tailwind CSS and CSS animations."
                                border="border-amber-200"
                                accent="text-amber-700"
                            />
                            <FeatureCard
                                icon=icons::HEART
                                title="Responsive"
                                description="Fully responsive design that looks great on all devices and screen sizes."
                                border="border-yellow-200"
                                accent="text-yellow-700"
                            />
                        </div>

                        // Technology badges
                        <div class="mb-12 fade-in-up" style=stagger_delay(2, 100)>
                            <h3 class="text-2xl font-semibold text-gray-800 mb-6">
                                "Built with modern technologies"
                            </h3>
                            <div class="flex flex-wrap justify-center gap-3">
                                {TECHNOLOGIES
                                    .into_iter()
                                    .map(|(name, colors)| view! {
                                        <Badge
                                            variant=BadgeVariant::Secondary
                                            class=format!("{} text-sm py-1 px-3", colors)
                                        >
                                            {name}
                                        </Badge>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Call to action
                        <div class="space-y-4 fade-in-up" style=stagger_delay(3, 100)>
                            <Button
                                size=ButtonSize::Large
                                href="/about"
                                class="bg-gradient-to-r from-orange-500 to-amber-500 hover:from-orange-600 hover:to-amber-600 text-white font-semibold py-3 px-8 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105"
                            >
                                "Get Started"
                            </Button>
                            <div class="text-gray-600">
                                <p>"Ready to build something amazing?"</p>
                            </div>
                        </div>

                        // Stats
                        <div
                            class="mt-16 p-8 bg-white/50 backdrop-blur-sm rounded-2xl border border-orange-200 shadow-lg fade-in-up"
                            style=stagger_delay(4, 100)
                        >
                            <h4 class="text-lg font-semibold text-gray-800 mb-4">"Application Stats"</h4>
                            <div class="grid grid-cols-3 gap-8">
                                <StatItem value="100%" label="Responsive" color="text-orange-600" />
                                <StatItem value="Fast" label="Performance" color="text-amber-600" />
                                <StatItem value="Modern" label="Design" color="text-yellow-600" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </PageTransition>
    }
}

/// Background icons drifting behind the content
#[component]
fn FloatingDecorations() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute top-20 left-10 opacity-30 float">
                <Icon name=icons::SUN class="w-16 h-16" />
            </div>
            <div class="absolute top-32 right-20 opacity-30 float" style="animation-delay: 1s;">
                <Icon name=icons::STAR class="w-12 h-12" />
            </div>
            <div class="absolute bottom-32 left-1/4 opacity-30 float" style="animation-delay: 2s;">
                <Icon name=icons::SPARKLES class="w-14 h-14" />
            </div>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    border: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <Card class=format!("bg-white/70 backdrop-blur-sm {} shadow-lg hover:shadow-xl transition-shadow", border)>
            <CardHeader>
                <CardTitle class=format!("{} flex items-center justify-center gap-2", accent)>
                    <Icon name=icon class="w-5 h-5" />
                    {title}
                </CardTitle>
            </CardHeader>
            <CardContent>
                <CardDescription class="text-gray-600">
                    {description}
                </CardDescription>
            </CardContent>
        </Card>
    }
}

#[component]
fn StatItem(value: &'static str, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class=format!("text-3xl font-bold {}", color)>{value}</div>
            <div class="text-sm text-gray-600">{label}</div>
        </div>
    }
}
