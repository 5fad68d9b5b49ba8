//! Root application component with routing and the shared project store.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::board::BoardPage;
use crate::state::store::ProjectStore;

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
/// Creates the page's single `ProjectStore` and provides it to every view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ProjectStore::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/project-board.css"/>
        <Title text="Project Board"/>

        <Router>
            <main id="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BoardPage/>
                </Routes>
            </main>
        </Router>
    }
}
