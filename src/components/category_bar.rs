//! Row of category filter buttons, including the "All" sentinel.

use leptos::prelude::*;

use crate::config::CategoryButton;
use crate::state::catalog::CategoryFilter;

#[component]
pub fn CategoryBar(
    categories: Vec<CategoryButton>,
    #[prop(into)] active: Signal<CategoryFilter>,
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-bar">
            {categories
                .into_iter()
                .map(|button| {
                    let CategoryButton { label, filter } = button;
                    let is_active = {
                        let filter = filter.clone();
                        move || active.get() == filter
                    };
                    view! {
                        <button
                            type="button"
                            class="btn btn--outline category-bar__button"
                            class:category-bar__button--active=is_active
                            on:click=move |_| on_select.run(filter.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
