//! Wire DTOs for the catalog listing endpoint.
//!
//! DESIGN
//! ======
//! The endpoint is a third-party JSON API, so identifiers and prices are
//! accepted as either numbers or strings and display fields default to empty
//! when absent. No other validation happens here; rendering works with
//! whatever values arrived.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One product record returned by the listing endpoint.
///
/// Every field tolerates `null`, a missing key, or an unexpected JSON type,
/// so one odd record never sinks the rest of the listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item identifier; numeric ids on the wire are kept as their decimal text.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    /// Image URL.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub image: String,
    /// Unit price in the storefront currency.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Category label used for filtering (exact match).
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    /// Optional variant labels (e.g. sizes). Absent on most records.
    #[serde(default, deserialize_with = "deserialize_variants")]
    pub variants: Vec<String>,
    /// Rating block; `count` doubles as the stock count.
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<Rating>,
}

/// Nested rating block from the listing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "deserialize_price")]
    pub rate: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: i64,
}

impl CatalogItem {
    /// Stock count derived from the nested rating block, zero when absent.
    pub fn stock_count(&self) -> i64 {
        self.rating.as_ref().map_or(0, |r| r.count)
    }

    pub fn in_stock(&self) -> bool {
        self.stock_count() > 0
    }
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_to_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Strings, numbers, and booleans as text; anything else as empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

/// Accept a JSON number or numeric string; `null` is zero. Anything else
/// becomes NaN, which the price formatter renders through its fallback path.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    Ok(value_to_f64(&value).unwrap_or(f64::NAN))
}

/// Variant labels from an array; non-text entries are dropped and any
/// non-array value means no variants.
fn deserialize_variants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries.into_iter().filter_map(value_to_text).collect()),
        _ => Ok(Vec::new()),
    }
}

/// Rating object, or `None` for `null` and non-object values.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Rating::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// Integer-compatible number or numeric string. Fractions round away from
/// zero so any positive count stays in stock; unusable values count as zero.
#[allow(clippy::cast_possible_truncation)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }
    let count = match value_to_f64(&value) {
        Some(float) if float.is_finite() => {
            let rounded = if float > 0.0 { float.ceil() } else { float.floor() };
            rounded as i64
        }
        _ => 0,
    };
    Ok(count)
}
