//! Currency formatting for price labels.
//!
//! The browser build formats through `Intl.NumberFormat` with the user's
//! locale. Native and SSR builds use a built-in en-US table: known
//! currencies use their symbol, other well-formed ISO 4217 codes are written
//! as a code prefix, the integer part is grouped with commas, and the
//! fraction uses the currency's minor unit digits. [`format_price`] never
//! fails; anything it cannot format falls back to a fixed two-decimal dollar
//! string.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Currency code used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Non-breaking space between an ISO code prefix and the amount.
#[cfg_attr(feature = "hydrate", allow(dead_code))]
const CODE_SEPARATOR: char = '\u{a0}';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("malformed currency code: {0:?}")]
    MalformedCode(String),

    #[error("price is not a finite number")]
    NonFinite,

    /// `Intl.NumberFormat` threw or returned something other than a string.
    #[error("Intl.NumberFormat failed: {0}")]
    Intl(String),
}

#[cfg_attr(feature = "hydrate", allow(dead_code))]
struct CurrencyStyle {
    symbol: Option<&'static str>,
    minor_digits: usize,
}

#[cfg_attr(feature = "hydrate", allow(dead_code))]
fn style_for(code: &str) -> CurrencyStyle {
    let (symbol, minor_digits) = match code {
        "USD" => (Some("$"), 2),
        "EUR" => (Some("€"), 2),
        "GBP" => (Some("£"), 2),
        "JPY" => (Some("¥"), 0),
        "CNY" => (Some("CN¥"), 2),
        "INR" => (Some("₹"), 2),
        "CAD" => (Some("CA$"), 2),
        "AUD" => (Some("A$"), 2),
        "NZD" => (Some("NZ$"), 2),
        "HKD" => (Some("HK$"), 2),
        "MXN" => (Some("MX$"), 2),
        "BRL" => (Some("R$"), 2),
        "TWD" => (Some("NT$"), 2),
        "KRW" => (Some("₩"), 0),
        "ILS" => (Some("₪"), 2),
        "PHP" => (Some("₱"), 2),
        "VND" => (Some("₫"), 0),
        "CLP" | "ISK" | "UGX" | "PYG" | "XAF" | "XOF" => (None, 0),
        "BHD" | "JOD" | "KWD" | "OMR" | "TND" => (None, 3),
        _ => (None, 2),
    };
    CurrencyStyle { symbol, minor_digits }
}

/// Format `amount` in the currency named by `code`.
///
/// # Errors
///
/// Returns [`CurrencyError::MalformedCode`] unless `code` is three ASCII
/// letters (any case), and [`CurrencyError::NonFinite`] for NaN or infinite
/// amounts.
pub fn try_format_currency(amount: f64, code: &str) -> Result<String, CurrencyError> {
    let code = code.trim();
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CurrencyError::MalformedCode(code.to_owned()));
    }
    if !amount.is_finite() {
        return Err(CurrencyError::NonFinite);
    }

    let code = code.to_ascii_uppercase();

    #[cfg(feature = "hydrate")]
    {
        intl_format(amount, &code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(table_format(amount, &code))
    }
}

#[cfg(feature = "hydrate")]
fn intl_format(amount: f64, code: &str) -> Result<String, CurrencyError> {
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl")).map_err(intl_error)?;
    let constructor = Reflect::get(&intl, &JsValue::from_str("NumberFormat"))
        .map_err(intl_error)?
        .dyn_into::<Function>()
        .map_err(intl_error)?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("style"), &JsValue::from_str("currency")).map_err(intl_error)?;
    Reflect::set(&options, &JsValue::from_str("currency"), &JsValue::from_str(code)).map_err(intl_error)?;

    // Undefined locales selects the browser's default locale.
    let args = Array::of2(&JsValue::UNDEFINED, &options);
    let formatter = Reflect::construct(&constructor, &args).map_err(intl_error)?;
    let format = Reflect::get(&formatter, &JsValue::from_str("format"))
        .map_err(intl_error)?
        .dyn_into::<Function>()
        .map_err(intl_error)?;

    format
        .call1(&formatter, &JsValue::from_f64(amount))
        .map_err(intl_error)?
        .as_string()
        .ok_or_else(|| CurrencyError::Intl("format returned a non-string".to_owned()))
}

#[cfg(feature = "hydrate")]
fn intl_error(err: wasm_bindgen::JsValue) -> CurrencyError {
    use wasm_bindgen::JsCast;

    let message = err
        .as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"));
    CurrencyError::Intl(message)
}

#[cfg_attr(feature = "hydrate", allow(dead_code))]
fn table_format(amount: f64, code: &str) -> String {
    let style = style_for(code);

    let fixed = format!("{:.*}", style.minor_digits, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + 8);
    if amount < 0.0 {
        out.push('-');
    }
    match style.symbol {
        Some(symbol) => out.push_str(symbol),
        None => {
            out.push_str(code);
            out.push(CODE_SEPARATOR);
        }
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Price label for display. Falls back to [`fallback_price`] on any
/// formatting failure.
pub fn format_price(amount: f64, code: &str) -> String {
    try_format_currency(amount, code).unwrap_or_else(|_| fallback_price(amount))
}

/// Last-resort price label: `$` plus the amount with two decimals.
pub fn fallback_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg_attr(feature = "hydrate", allow(dead_code))]
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
