//! Placeholder blocks shown while the catalog request is pending.

#[cfg(test)]
#[path = "loading_skeleton_test.rs"]
mod loading_skeleton_test;

use leptos::prelude::*;

const TITLE_HEIGHT_PX: u32 = 40;
const TITLE_WIDTH_PX: u32 = 560;
const CARD_HEIGHT_PX: u32 = 592;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    Card,
}

/// One gray placeholder block. `width` of `None` fills the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderBlock {
    pub kind: PlaceholderKind,
    pub height: u32,
    pub width: Option<u32>,
}

impl PlaceholderBlock {
    fn style(self) -> String {
        match self.width {
            Some(width) => format!("height: {}px; width: {width}px", self.height),
            None => format!("height: {}px", self.height),
        }
    }
}

/// One title-sized block followed by `cards` card-sized blocks.
pub fn placeholder_blocks(cards: usize) -> Vec<PlaceholderBlock> {
    let title = PlaceholderBlock { kind: PlaceholderKind::Title, height: TITLE_HEIGHT_PX, width: Some(TITLE_WIDTH_PX) };
    let card = PlaceholderBlock { kind: PlaceholderKind::Card, height: CARD_HEIGHT_PX, width: None };
    std::iter::once(title).chain(std::iter::repeat_n(card, cards)).collect()
}

#[component]
pub fn CatalogSkeleton(cards: usize) -> impl IntoView {
    placeholder_blocks(cards)
        .into_iter()
        .map(|block| {
            let wrapper = match block.kind {
                PlaceholderKind::Title => "catalog-skeleton__title",
                PlaceholderKind::Card => "catalog-skeleton__card",
            };
            view! {
                <div class=wrapper>
                    <span class="skeleton" style=block.style() aria-hidden="true"></span>
                </div>
            }
        })
        .collect::<Vec<_>>()
}
