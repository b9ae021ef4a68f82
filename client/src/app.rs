//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::config::ClientConfig;
use crate::pages::{about::AboutPage, annotator::AnnotatorPage, dashboard::DashboardPage};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and the client configuration, provides both as
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::new());
    provide_context(ClientConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/genocrowd.css"/>
        <Title text="Genocrowd"/>

        <Router>
            <NavBar/>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <DashboardPage/> }/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <DashboardPage/> }/>
                    <Route path=StaticSegment("annotator") view=|| view! { <AnnotatorPage/> }/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}
