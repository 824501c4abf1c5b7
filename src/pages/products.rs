//! Product listing page: fetches the catalog, filters by category, and
//! forwards add-to-cart intents to the cart store.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route. The catalog is requested once per mount; tearing
//! the page down aborts the request and its result is dropped without
//! touching state or logging.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::category_bar::CategoryBar;
use crate::components::loading_skeleton::CatalogSkeleton;
use crate::components::product_card::ProductCard;
use crate::components::toast_host::notify_success;
use crate::config::StorefrontConfig;
use crate::net::fetch::{FetchHandle, cancellable};
use crate::net::types::CatalogItem;
use crate::state::cart::{CartLineIntent, CartState};
use crate::state::catalog::{CatalogState, CategoryFilter};
use crate::state::toast::ToastState;

pub const ADDED_TO_CART_MESSAGE: &str = "Added to cart";

/// Client-side route for an item's buy page.
pub fn buy_href(id: &str) -> String {
    format!("/product/{id}")
}

/// Intent forwarded to the cart store for an add-to-cart click.
pub fn cart_intent(item: &CatalogItem, variant: Option<String>) -> CartLineIntent {
    CartLineIntent { item: item.clone(), variant }
}

/// Listing page.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let handle = start_catalog_fetch(catalog, config.catalog_url.clone());
    on_cleanup(move || {
        handle.cancel();
        catalog.try_update(CatalogState::abandon_loading);
    });

    let loading = Memo::new(move |_| catalog.with(|s| s.loading));
    let active = Signal::derive(move || catalog.with(|s| s.filter.clone()));
    let on_filter = Callback::new(move |filter: CategoryFilter| catalog.update(|s| s.apply_filter(filter)));

    let placeholder_cards = config.placeholder_cards;
    let StorefrontConfig { categories, currency, .. } = config;

    let listing = move || {
        let categories = categories.clone();
        let currency = currency.clone();
        view! {
            <CategoryBar categories=categories active=active on_select=on_filter/>
            <For
                each=move || catalog.with(|s| s.filtered.clone())
                key=|item| item.id.clone()
                children=move |item| view! { <ProductListing item=item currency=currency.clone()/> }
            />
        }
    };

    view! {
        <div class="products-page">
            <h2 class="products-page__title">"Latest Products"</h2>
            <hr/>
            <div class="products-page__grid">
                {move || {
                    if loading.get() {
                        view! { <CatalogSkeleton cards=placeholder_cards/> }.into_any()
                    } else {
                        listing().into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// One grid cell: a product card wired to the cart store and toasts.
#[component]
fn ProductListing(item: CatalogItem, currency: String) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let id = item.id.clone();
    let in_stock = item.in_stock();
    let href = buy_href(&item.id);
    let image = item.image.clone();
    let name = item.title.clone();
    let price = item.price;
    let variants = item.variants.clone();

    let on_add_to_cart = Callback::new(move |variant: Option<String>| {
        notify_success(toasts, ADDED_TO_CART_MESSAGE);
        let intent = cart_intent(&item, variant);
        cart.update(|c| c.add(intent));
    });

    view! {
        <div class="products-page__cell" id=id>
            <ProductCard
                image=image
                name=name
                price=price
                currency=currency
                variants=variants
                in_stock=in_stock
                on_add_to_cart=on_add_to_cart
                buy_href=href
            />
        </div>
    }
}

/// Mark the catalog as loading and start the fetch in the browser build.
///
/// The returned handle cancels the fetch; a cancelled fetch never writes to
/// `catalog`.
fn start_catalog_fetch(catalog: RwSignal<CatalogState>, url: String) -> FetchHandle {
    let (handle, registration) = cancellable();
    catalog.update(CatalogState::begin_loading);

    #[cfg(feature = "hydrate")]
    {
        let guard = handle.clone();
        leptos::task::spawn_local(async move {
            let source = crate::net::api::HttpCatalogSource::new(url);
            let outcome =
                crate::net::fetch::fetch_catalog(&source, registration, &crate::util::diagnostics::LogSink).await;
            if outcome.is_cancelled() || guard.is_cancelled() {
                return;
            }
            catalog.try_update(|s| s.apply_outcome(outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, registration);
    }

    handle
}
