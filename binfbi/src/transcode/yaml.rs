//! YAML transcoding: render the FBI generic export as YAML text.
//!
//! Mapping:
//!   - field entry            -> YAML string under its field name
//!   - child section entry    -> YAML mapping under its "[header]" key
//!
//! The export's key-collision lossiness carries through unchanged; YAML
//! mappings preserve the export's insertion order.

use libfbi::{RawMap, RawValue};

/// Encode a generic export mapping as a YAML string.
pub fn encode(map: &RawMap) -> Result<String, String> {
    serde_yaml::to_string(&raw_to_yaml(map)).map_err(|e| format!("YAML encode error: {}", e))
}

fn raw_to_yaml(map: &RawMap) -> serde_yaml::Value {
    let mut mapping = serde_yaml::Mapping::new();
    for (key, value) in map {
        let rendered = match value {
            RawValue::Text(s) => serde_yaml::Value::String(s.clone()),
            RawValue::Map(m) => raw_to_yaml(m),
        };
        mapping.insert(serde_yaml::Value::String(key.clone()), rendered);
    }
    serde_yaml::Value::Mapping(mapping)
}
