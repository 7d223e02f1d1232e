use crate::core::errors::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/*-------------------------------------------------------------------------------------------------
  Render JSON
-------------------------------------------------------------------------------------------------*/

const INDENT: &[u8] = b"    ";

/// Serialize a value to indented JSON text with object keys sorted at every depth.
///
/// The value passes through [serde_json::Value] first; its object map is ordered by key, so
/// struct field order and source order never leak into the output.
///
/// ```
/// let text = o365endpoints::render(&serde_json::json!({"b": 1, "a": [true]})).unwrap();
/// assert_eq!(text, "{\n    \"a\": [\n        true\n    ],\n    \"b\": 1\n}");
/// ```
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).map_err(Error::Render)?;

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).map_err(Error::Render)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Unordered {
        zulu: u8,
        alpha: u8,
    }

    #[test]
    fn test_render_sorts_keys() {
        let text = render(&Unordered { zulu: 1, alpha: 2 }).unwrap();
        assert!(text.find("alpha").unwrap() < text.find("zulu").unwrap());
    }

    #[test]
    fn test_render_sorts_nested_keys() {
        let text = render(&json!([{"b": {"y": 1, "x": 2}, "a": null}])).unwrap();
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
        assert!(text.find("\"x\"").unwrap() < text.find("\"y\"").unwrap());
    }

    #[test]
    fn test_render_is_valid_json() {
        let value = json!({"key": ["13.107.6.152/31"], "flag": false, "n": 3});
        let text = render(&value).unwrap();
        let round_trip: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(round_trip, value);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut map = BTreeMap::new();
        map.insert("exchangeOnlineIPv4", vec!["40.92.0.0/15", "13.107.6.152/31"]);
        assert_eq!(render(&map).unwrap(), render(&map).unwrap());
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&42).unwrap(), "42");
        assert_eq!(render("text").unwrap(), "\"text\"");
        assert_eq!(render(&json!([])).unwrap(), "[]");
    }
}
