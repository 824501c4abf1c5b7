//! Storefront configuration with environment overrides.
//!
//! Defaults describe the public demo catalog. In the browser build the
//! process environment is empty, so [`StorefrontConfig::from_env`] yields
//! the defaults there.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::DEFAULT_CATALOG_URL;
use crate::state::catalog::CategoryFilter;
use crate::util::currency::{DEFAULT_CURRENCY, try_format_currency};

pub const DEFAULT_PLACEHOLDER_CARDS: usize = 6;

pub const ENV_CATALOG_URL: &str = "STOREFRONT_CATALOG_URL";
pub const ENV_CURRENCY: &str = "STOREFRONT_CURRENCY";
pub const ENV_PLACEHOLDER_CARDS: &str = "STOREFRONT_PLACEHOLDER_CARDS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// One category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub label: String,
    pub filter: CategoryFilter,
}

impl CategoryButton {
    pub fn new(label: &str, filter: CategoryFilter) -> Self {
        Self { label: label.to_owned(), filter }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_url: String,
    pub currency: String,
    /// Card-sized placeholders shown while the catalog loads.
    pub placeholder_cards: usize,
    pub categories: Vec<CategoryButton>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
            placeholder_cards: DEFAULT_PLACEHOLDER_CARDS,
            categories: default_categories(),
        }
    }
}

impl StorefrontConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `STOREFRONT_CATALOG_URL`: listing endpoint
    /// - `STOREFRONT_CURRENCY`: ISO 4217 code, default `USD`
    /// - `STOREFRONT_PLACEHOLDER_CARDS`: default 6
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty URL, a malformed
    /// currency code, or a non-numeric placeholder count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_CATALOG_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Invalid { var: ENV_CATALOG_URL, value: url.to_owned() });
            }
            config.catalog_url = url.to_owned();
        }

        if let Some(currency) = lookup(ENV_CURRENCY) {
            if try_format_currency(0.0, &currency).is_err() {
                return Err(ConfigError::Invalid { var: ENV_CURRENCY, value: currency });
            }
            config.currency = currency.trim().to_ascii_uppercase();
        }

        if let Some(raw) = lookup(ENV_PLACEHOLDER_CARDS) {
            config.placeholder_cards = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid { var: ENV_PLACEHOLDER_CARDS, value: raw.clone() })?;
        }

        Ok(config)
    }
}

fn default_categories() -> Vec<CategoryButton> {
    vec![
        CategoryButton::new("All", CategoryFilter::All),
        CategoryButton::new("Men's Clothing", CategoryFilter::category("men's clothing")),
        CategoryButton::new("Women's Clothing", CategoryFilter::category("women's clothing")),
        CategoryButton::new("Jewelery", CategoryFilter::category("jewelery")),
        CategoryButton::new("Electronics", CategoryFilter::category("electronics")),
    ]
}
