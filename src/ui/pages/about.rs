//! About page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::transition::{PageTransition, stagger_delay};

const TECHNOLOGIES: [&str; 6] = [
    "Rust",
    "Leptos",
    "Leptos Router",
    "Axum",
    "Tailwind CSS",
    "WebAssembly",
];

const KEY_FEATURES: [&str; 4] = [
    "Responsive mobile-first design",
    "Smooth CSS entrance animations",
    "Accessible color contrasts",
    "Modern gradient backgrounds",
];

/// About page component
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Hello World" />

        <PageTransition>
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50">
                <div class="container mx-auto px-4 py-12">
                    <div class="max-w-4xl mx-auto">
                        // Back button
                        <div class="mb-8 fade-in-up" style=stagger_delay(0, 100)>
                            <Button variant=ButtonVariant::Outline href="/" icon=icons::ARROW_LEFT class="gap-2">
                                "Back to Home"
                            </Button>
                        </div>

                        // Header
                        <div class="text-center mb-12 fade-in-up" style=stagger_delay(1, 100)>
                            <h1 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-4">
                                "About This Project"
                            </h1>
                            <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                                "A modern Rust Hello World application built with Leptos and a beautiful light mode design."
                            </p>
                        </div>

                        <div class="grid gap-8 md:grid-cols-2">
                            <div class="fade-in-up" style=stagger_delay(2, 100)>
                                <ProjectOverviewCard />
                            </div>
                            <div class="fade-in-up" style=stagger_delay(3, 100)>
                                <DesignPhilosophyCard />
                            </div>
                        </div>

                        <div class="mt-8 fade-in-up" style=stagger_delay(4, 100)>
                            <TechnologiesCard />
                        </div>

                        // Call to action
                        <div class="mt-12 text-center fade-in-up" style=stagger_delay(5, 100)>
                            <div class="bg-gradient-to-r from-blue-500/10 to-purple-500/10 rounded-2xl p-8 border border-blue-200/50">
                                <h3 class="text-2xl font-bold text-gray-800 mb-4">"Ready to explore?"</h3>
                                <p class="text-gray-600 mb-6 max-w-2xl mx-auto">
                                    "This project demonstrates how a simple concept can be elevated with modern tools and thoughtful design. Feel free to explore the code and use it as a foundation for your own projects."
                                </p>
                                <Button
                                    size=ButtonSize::Large
                                    href="/"
                                    class="bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white"
                                >
                                    "Back to Hello World"
                                </Button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </PageTransition>
    }
}

#[component]
fn ProjectOverviewCard() -> impl IntoView {
    view! {
        <Card class="h-full">
            <CardHeader>
                <CardTitle class="flex items-center gap-2">
                    <Icon name=icons::CODE class="w-5 h-5" />
                    "Project Overview"
                </CardTitle>
                <CardDescription>"What makes this Hello World special"</CardDescription>
            </CardHeader>
            <CardContent class="space-y-4">
                <p class="text-gray-700">
                    "This isn't just any Hello World application. It's a showcase of modern web development practices, featuring a clean architecture, smooth animations, and a responsive design that works across all devices."
                </p>
                <div class="flex items-center gap-2 text-sm text-gray-600">
                    <Icon name=icons::HEART class="w-4 h-4" />
                    "Built with love and attention to detail"
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn DesignPhilosophyCard() -> impl IntoView {
    view! {
        <Card class="h-full">
            <CardHeader>
                <CardTitle class="flex items-center gap-2">
                    <Icon name=icons::PALETTE class="w-5 h-5" />
                    "Design Philosophy"
                </CardTitle>
                <CardDescription>"Light, clean, and user-friendly"</CardDescription>
            </CardHeader>
            <CardContent class="space-y-4">
                <p class="text-gray-700">
                    "The light mode color scheme emphasizes clarity and readability. Every element is crafted to provide a pleasant experience with smooth animations and intuitive interactions."
                </p>
                <div class="space-y-2">
                    <div class="text-sm font-medium text-gray-700">"Key Features:"</div>
                    <ul class="text-sm text-gray-600 space-y-1">
                        {KEY_FEATURES
                            .into_iter()
                            .map(|feature| view! { <li>"• " {feature}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </CardContent>
        </Card>
    }
}

/// Technology badges, popping in one after another
#[component]
fn TechnologiesCard() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Technologies Used"</CardTitle>
                <CardDescription>"Built with the latest and greatest web technologies"</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-wrap gap-2">
                    {TECHNOLOGIES
                        .into_iter()
                        .enumerate()
                        .map(|(index, tech)| view! {
                            <div class="pop-in" style=stagger_delay(index, 100)>
                                <Badge variant=BadgeVariant::Secondary class="text-sm">
                                    {tech}
                                </Badge>
                            </div>
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}
