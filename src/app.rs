//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::components::toast_host::ToastHost;
use crate::config::StorefrontConfig;
use crate::pages::{product::ProductPage, products::ProductsPage};
use crate::state::{cart::CartState, catalog::CatalogState, toast::ToastState};

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
/// Provides config, catalog, cart, and toast contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::from_env().unwrap_or_else(|e| {
        log::warn!("storefront config rejected, using defaults: {e}");
        StorefrontConfig::default()
    });

    provide_context(config);
    provide_context(RwSignal::new(CatalogState::default()));
    provide_context(RwSignal::new(CartState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Nav/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProductsPage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
