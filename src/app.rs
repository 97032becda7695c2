use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::{AboutPage, GlobalStyles, HomePage, Layout, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="A two-page Hello World site built with Rust and Leptos."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/hello-world.css"/>
        <GlobalStyles />

        // default title, pages override it
        <Title text="Hello World"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </Layout>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_router::location::RequestUrl;

    /// Server-render the whole app for a request path
    fn render_at(path: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App/> }.to_html()
        })
    }

    /// `href` of every `<a>` tag marked as the current page
    fn active_hrefs(html: &str) -> Vec<String> {
        html.split("<a ")
            .skip(1)
            .filter_map(|rest| rest.split('>').next())
            .filter(|tag| tag.contains(r#"aria-current="page""#))
            .filter_map(|tag| {
                let start = tag.find(r#"href=""#)? + r#"href=""#.len();
                let len = tag[start..].find('"')?;
                Some(tag[start..start + len].to_string())
            })
            .collect()
    }

    #[test]
    fn test_home_renders_no_greeting_before_mount() {
        let html = render_at("/");

        for text in [
            "Good Morning, World!",
            "Good Afternoon, World!",
            "Good Evening, World!",
        ] {
            assert!(!html.contains(text), "greeting rendered on the server: {text}");
        }
        // The shared chrome is still there
        assert!(html.contains("Toggle navigation menu"));
        assert!(html.contains("Styled with Tailwind CSS"));
    }

    #[test]
    fn test_mobile_menu_starts_collapsed() {
        let html = render_at("/");

        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains("max-height: 0; opacity: 0;"));
        assert!(!html.contains("max-height: 24rem"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("btn-base btn-ghost btn-sm p-2 md:hidden"));
    }

    #[test]
    fn test_home_links_marked_current_on_root() {
        let active = active_hrefs(&render_at("/"));

        assert!(!active.is_empty());
        assert!(active.iter().all(|href| href == "/"), "{active:?}");
    }

    #[test]
    fn test_about_links_marked_current_on_about() {
        let html = render_at("/about");
        let active = active_hrefs(&html);

        assert!(html.contains("About This Project"));
        // Desktop and mobile entries, never the root links
        assert_eq!(active, vec!["/about".to_string(), "/about".to_string()]);
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = render_at("/missing");

        assert!(html.contains("Page Not Found"));
        assert!(active_hrefs(&html).is_empty());
    }
}
