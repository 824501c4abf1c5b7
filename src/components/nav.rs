//! Top navigation bar with the cart badge.

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::state::cart::CartState;
use crate::util::currency::format_price;

#[component]
pub fn Nav() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let currency = expect_context::<StorefrontConfig>().currency;

    let badge = move || {
        cart.with(|c| {
            if c.is_empty() {
                "Cart (0)".to_owned()
            } else {
                format!("Cart ({}) · {}", c.item_count(), format_price(c.subtotal(), &currency))
            }
        })
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"Storefront"</a>
            <span class="nav__spacer"></span>
            <span class="nav__cart" title="Cart">{badge}</span>
        </nav>
    }
}
