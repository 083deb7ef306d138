//! Helpers for reading typed placement parameters out of a JSON object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key
//! or a value of the wrong type yields the default; these never fail.
//! Range checks happen later in `PlacementParams::validate`.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`; integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`. Values above `u32::MAX` fall back
/// to `default`.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}
