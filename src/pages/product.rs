//! Buy page for a single item, reached from a card's "Buy Now" link.
//!
//! The item comes from the catalog already loaded by the listing page; this
//! route does not fetch on its own.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::ProductCard;
use crate::components::toast_host::notify_success;
use crate::config::StorefrontConfig;
use crate::pages::products::{ADDED_TO_CART_MESSAGE, cart_intent};
use crate::state::cart::CartState;
use crate::state::catalog::CatalogState;
use crate::state::toast::ToastState;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let config = expect_context::<StorefrontConfig>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let item = Memo::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        catalog.with(|s| s.find(&id).cloned())
    });
    let currency = config.currency;

    move || match item.get() {
        Some(item) => {
            let forwarded = item.clone();
            let on_add_to_cart = Callback::new(move |variant: Option<String>| {
                notify_success(toasts, ADDED_TO_CART_MESSAGE);
                let intent = cart_intent(&forwarded, variant);
                cart.update(|c| c.add(intent));
            });
            view! {
                <div class="product-page">
                    <a class="product-page__back" href="/">"← Back to products"</a>
                    <div class="product-page__card">
                        <ProductCard
                            image=item.image.clone()
                            name=item.title.clone()
                            price=item.price
                            currency=currency.clone()
                            variants=item.variants.clone()
                            in_stock=item.in_stock()
                            on_add_to_cart=on_add_to_cart
                        />
                    </div>
                    <p class="product-page__category">{item.category.clone()}</p>
                    <p class="product-page__description">{item.description.clone()}</p>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="product-page">
                <p>"Product not found."</p>
                <a href="/">"Back to products"</a>
            </div>
        }
        .into_any(),
    }
}
