//! Query-string and form encoding for request parameters.
//!
//! Parameters are any `Serialize` value that flattens to a JSON object of
//! scalars. Strings pass through unchanged, numbers become their decimal
//! text, booleans become `1`/`0` (the service's flag convention) and `null`
//! members are dropped.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key or value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Flatten parameters into ordered `(key, value)` pairs.
///
/// `()` and `None` serialize to `null` and yield no pairs.
pub fn to_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(params)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidParams(format!(
                "expected a key/value map, got {}",
                other
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => number_text(&n),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => "0".to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::InvalidParams(format!(
                    "parameter `{}` must be a scalar",
                    key
                )));
            }
        };
        pairs.push((key, text));
    }
    Ok(pairs)
}

/// Decimal text for a number, without the `.0` or exponent serde_json gives
/// whole-valued floats.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// Join pairs as `key=value&key=value`, percent-encoding both sides.
pub fn query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append encoded parameters to an endpoint. No `?` when there is nothing to add.
pub(crate) fn with_query<P: Serialize + ?Sized>(endpoint: &str, params: &P) -> Result<String> {
    let pairs = to_pairs(params)?;
    if pairs.is_empty() {
        return Ok(endpoint.to_string());
    }
    Ok(format!("{}?{}", endpoint, query_string(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Filter {
        status: Option<&'static str>,
        account_id: Option<u64>,
        force: bool,
    }

    #[test]
    fn test_empty_params_leave_endpoint_untouched() {
        assert_eq!(with_query("/rooms", &()).unwrap(), "/rooms");
        assert_eq!(
            with_query("/rooms", &BTreeMap::<String, String>::new()).unwrap(),
            "/rooms"
        );
        assert_eq!(with_query("/my/tasks", &None::<Filter>).unwrap(), "/my/tasks");
    }

    #[test]
    fn test_pairs_joined_with_ampersand() {
        let mut params = BTreeMap::new();
        params.insert("description", "weekly sync");
        params.insert("name", "x");
        assert_eq!(
            with_query("/rooms/1", &params).unwrap(),
            "/rooms/1?description=weekly%20sync&name=x"
        );
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let mut params = BTreeMap::new();
        params.insert("a&b", "c=d/é");
        assert_eq!(query_string(&to_pairs(&params).unwrap()), "a%26b=c%3Dd%2F%C3%A9");
    }

    #[test]
    fn test_component_set_matches_encode_uri_component() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_component("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_scalars_flatten_and_nulls_drop() {
        let pairs = to_pairs(&Filter {
            status: None,
            account_id: Some(42),
            force: true,
        })
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("account_id".to_string(), "42".to_string()),
                ("force".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_whole_floats_render_without_fraction() {
        let params = serde_json::json!({ "limit": 1e3, "ratio": 1.5, "neg": -2.0 });
        assert_eq!(
            with_query("/rooms/1/tasks", &params).unwrap(),
            "/rooms/1/tasks?limit=1000&ratio=1.5&neg=-2"
        );
    }

    #[test]
    fn test_nested_values_rejected() {
        let params = serde_json::json!({ "ids": [1, 2] });
        assert!(matches!(to_pairs(&params), Err(Error::InvalidParams(_))));

        let params = serde_json::json!("just a string");
        assert!(matches!(to_pairs(&params), Err(Error::InvalidParams(_))));
    }
}
