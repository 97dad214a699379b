//! Generic export of the document tree to an ordered key/value mapping.

use indexmap::IndexMap;

use crate::section::Section;

/// Insertion-ordered mapping produced by [`Section::to_raw`].
pub type RawMap = IndexMap<String, RawValue>;

/// An entry in the generic export: a field's string value or a nested
/// section mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    Map(RawMap),
}

impl Section {
    /// Convert this section to a generic ordered mapping.
    ///
    /// Each child section contributes an entry keyed by its bracketed
    /// header (`"[header]"`), then each field contributes an entry keyed
    /// by its name. Fields and sections share one key namespace, so a
    /// collision overwrites the earlier entry. The tree itself is
    /// lossless; only this export is.
    pub fn to_raw(&self) -> RawMap {
        let mut map = RawMap::new();
        for child in &self.children {
            map.insert(format!("[{}]", child.header), RawValue::Map(child.to_raw()));
        }
        for field in &self.fields {
            map.insert(field.name.clone(), RawValue::Text(field.value.clone()));
        }
        map
    }
}
