//! Render the generic export as JSON text.
//!
//! The document tree carries only strings and nested mappings, so the JSON
//! output is objects and strings all the way down. Entries keep insertion
//! (file) order. YAML and TOML output is handled externally by the CLI tool
//! (binfbi) using dedicated libraries.

use crate::raw::{RawMap, RawValue};

/// Encode a generic export mapping as pretty-printed JSON.
pub fn encode_json(map: &RawMap) -> String {
    encode_json_map(map, 0)
}

fn encode_json_map(map: &RawMap, indent: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }

    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);
    let items: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                RawValue::Text(s) => encode_json_string(s),
                RawValue::Map(m) => encode_json_map(m, indent + 1),
            };
            format!("{}{}: {}", pad1, encode_json_string(key), rendered)
        })
        .collect();

    format!("{{\n{}\n{}}}", items.join(",\n"), pad)
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map() {
        assert_eq!(encode_json(&RawMap::new()), "{}");
    }

    #[test]
    fn test_nested_map_preserves_order() {
        let mut inner = RawMap::new();
        inner.insert("host".to_string(), RawValue::Text("localhost".to_string()));
        inner.insert("port".to_string(), RawValue::Text("8080".to_string()));
        let mut map = RawMap::new();
        map.insert("[server]".to_string(), RawValue::Map(inner));
        assert_eq!(
            encode_json(&map),
            "{\n  \"[server]\": {\n    \"host\": \"localhost\",\n    \"port\": \"8080\"\n  }\n}"
        );
    }

    #[test]
    fn test_string_escaping() {
        let mut map = RawMap::new();
        map.insert(
            "quote".to_string(),
            RawValue::Text("say \"hi\"\\now".to_string()),
        );
        assert_eq!(
            encode_json(&map),
            "{\n  \"quote\": \"say \\\"hi\\\"\\\\now\"\n}"
        );
    }
}
