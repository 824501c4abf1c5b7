//! Product card: image, name, price, variant selector, and purchase actions.
//!
//! DESIGN
//! ======
//! The card owns exactly one piece of local state, the selected variant.
//! Selection changes stay local; the parent only hears about them through
//! the add-to-cart callback. Enablement rules live on [`ProductCardModel`]
//! so they can be checked without a DOM.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::util::currency::{DEFAULT_CURRENCY, format_price};

/// Href used for the buy link while it is disabled.
const DISABLED_HREF: &str = "#";

/// Payload reported upward when the add-to-cart control is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddToCartRequest {
    /// Selected variant, `None` when the item has no variants.
    pub variant: Option<String>,
}

/// Local state and enablement rules for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCardModel {
    pub variants: Vec<String>,
    pub selected: String,
    pub in_stock: bool,
    pub buy_href: Option<String>,
}

impl ProductCardModel {
    pub fn new(variants: Vec<String>, in_stock: bool, buy_href: Option<String>) -> Self {
        let selected = variants.first().cloned().unwrap_or_default();
        let buy_href = buy_href.filter(|href| !href.is_empty());
        Self { variants, selected, in_stock, buy_href }
    }

    /// Change the selected variant. Ignored while out of stock or for labels
    /// not in the variant list.
    pub fn select_variant(&mut self, variant: &str) -> bool {
        if self.variant_selector_disabled() || !self.variants.iter().any(|v| v == variant) {
            return false;
        }
        variant.clone_into(&mut self.selected);
        true
    }

    pub fn show_variant_selector(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn variant_selector_disabled(&self) -> bool {
        !self.in_stock
    }

    pub fn add_to_cart_enabled(&self) -> bool {
        self.in_stock
    }

    pub fn add_to_cart_label(&self) -> &'static str {
        if self.in_stock { "Add to Cart" } else { "Out of Stock" }
    }

    /// What a click on the add-to-cart control reports, if anything.
    pub fn add_to_cart(&self) -> Option<AddToCartRequest> {
        if !self.add_to_cart_enabled() {
            return None;
        }
        let variant = (!self.selected.is_empty()).then(|| self.selected.clone());
        Some(AddToCartRequest { variant })
    }

    pub fn buy_now_enabled(&self) -> bool {
        self.in_stock && self.buy_href.is_some()
    }

    pub fn buy_now_target(&self) -> &str {
        match &self.buy_href {
            Some(href) if self.in_stock => href,
            _ => DISABLED_HREF,
        }
    }

    /// Whether a click on the buy link must cancel default navigation.
    pub fn suppress_navigation(&self) -> bool {
        !self.buy_now_enabled()
    }
}

/// Card for one catalog item.
#[component]
pub fn ProductCard(
    image: String,
    name: String,
    price: f64,
    #[prop(into, default = DEFAULT_CURRENCY.to_owned())] currency: String,
    #[prop(default = Vec::new())] variants: Vec<String>,
    #[prop(default = true)] in_stock: bool,
    #[prop(optional)] on_add_to_cart: Option<Callback<Option<String>>>,
    #[prop(optional)] buy_href: Option<String>,
) -> impl IntoView {
    let model = RwSignal::new(ProductCardModel::new(variants.clone(), in_stock, buy_href));
    let initial = model.get_untracked();
    let price_label = format_price(price, &currency);

    let on_add = move |_| {
        let Some(request) = model.with_untracked(ProductCardModel::add_to_cart) else {
            return;
        };
        if let Some(on_add_to_cart) = on_add_to_cart {
            on_add_to_cart.run(request.variant);
        }
    };

    let on_buy_click = move |ev: leptos::ev::MouseEvent| {
        if model.with_untracked(ProductCardModel::suppress_navigation) {
            ev.prevent_default();
        }
    };

    let add_enabled = initial.add_to_cart_enabled();
    let add_label = initial.add_to_cart_label();
    let buy_enabled = initial.buy_now_enabled();
    let buy_target = initial.buy_now_target().to_owned();
    let buy_aria_disabled = (!buy_enabled).to_string();
    let selector_disabled = initial.variant_selector_disabled();

    let selector = initial.show_variant_selector().then(|| {
        view! {
            <select
                class="product-card__variant"
                aria-label="Choose variant"
                prop:value=move || model.get().selected
                disabled=selector_disabled
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    model.update(|m| {
                        m.select_variant(&value);
                    });
                }
            >
                {variants
                    .into_iter()
                    .map(|variant| {
                        let label = variant.clone();
                        view! { <option value=variant>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
    });

    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=image alt=name.clone() loading="lazy"/>
            </div>
            <div class="product-card__body">
                <h5 class="product-card__name" title=name.clone()>{name.clone()}</h5>
                <p class="product-card__price">{price_label}</p>
                {selector}
                <div class="product-card__actions">
                    <button
                        type="button"
                        class="btn"
                        class:btn--success=add_enabled
                        class:btn--disabled=!add_enabled
                        disabled=!add_enabled
                        on:click=on_add
                    >
                        {add_label}
                    </button>
                    <a
                        href=buy_target
                        class="btn btn--primary"
                        class:btn--disabled=!buy_enabled
                        aria-disabled=buy_aria_disabled
                        on:click=on_buy_click
                    >
                        "Buy Now"
                    </a>
                </div>
            </div>
        </div>
    }
}
