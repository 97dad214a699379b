//! TOML transcoding: render the FBI generic export as TOML text.
//!
//! Mapping:
//!   - field entry            -> TOML string under its field name
//!   - child section entry    -> TOML table under its "[header]" key
//!
//! Bracketed section keys are not bare TOML keys, so toml_edit quotes them
//! in the output. Every FBI value is a string, so the document is always
//! TOML-representable.

use libfbi::{RawMap, RawValue};
use toml_edit::{value, DocumentMut, Item, Table};

/// Encode a generic export mapping as a TOML string.
pub fn encode(map: &RawMap) -> Result<String, String> {
    let mut doc = DocumentMut::new();
    for (key, val) in map {
        doc[key.as_str()] = raw_to_item(val);
    }
    Ok(doc.to_string())
}

fn raw_to_item(val: &RawValue) -> Item {
    match val {
        RawValue::Text(s) => value(s.as_str()),
        RawValue::Map(m) => {
            let mut table = Table::new();
            for (key, inner) in m {
                table[key.as_str()] = raw_to_item(inner);
            }
            Item::Table(table)
        }
    }
}
