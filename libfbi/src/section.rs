//! FBI document model: a tree of sections holding string-valued fields.

/// A single `name = value;` entry in a section.
///
/// The value is always the trimmed text between `=` and `;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// A named node in the document tree.
///
/// Fields and children keep insertion (file) order, and duplicates are
/// retained as-is: two fields with the same name are both stored, and the
/// lookup accessors return the first match. The implicit root section has
/// an empty header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    /// The name between `[` and `]`; empty for the root.
    pub header: String,
    /// Fields in file order.
    pub fields: Vec<Field>,
    /// Child sections in file order.
    pub children: Vec<Section>,
}

impl Section {
    /// Create an empty section with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fields: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The value of the first field with the given name, or `None`.
    ///
    /// Later duplicates are shadowed, never merged.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// The first child section with the given header, or `None`.
    pub fn child(&self, header: &str) -> Option<&Section> {
        self.children.iter().find(|s| s.header == header)
    }

    /// Render the tree depth-first for inspection: each section's header
    /// and field count, children indented by four spaces.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into("", &mut out);
        out
    }

    fn outline_into(&self, padding: &str, out: &mut String) {
        out.push_str(padding);
        out.push('[');
        out.push_str(&self.header);
        out.push_str("]\n");
        out.push_str(padding);
        out.push_str(&format!("Fields: {}\n", self.fields.len()));
        let deeper = format!("{}    ", padding);
        for child in &self.children {
            child.outline_into(&deeper, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        let mut root = Section::default();
        root.fields.push(Field {
            name: "key".to_string(),
            value: "first".to_string(),
        });
        root.fields.push(Field {
            name: "key".to_string(),
            value: "second".to_string(),
        });
        root.children.push(Section::new("dup"));
        let mut second = Section::new("dup");
        second.fields.push(Field {
            name: "marker".to_string(),
            value: "yes".to_string(),
        });
        root.children.push(second);
        root
    }

    #[test]
    fn test_value_returns_first_match() {
        let root = sample();
        assert_eq!(root.value("key"), Some("first"));
        assert_eq!(root.value("missing"), None);
    }

    #[test]
    fn test_child_returns_first_match() {
        let root = sample();
        let child = root.child("dup").unwrap();
        assert!(child.fields.is_empty());
        assert_eq!(root.child("missing"), None);
    }

    #[test]
    fn test_outline_indents_children() {
        let root = sample();
        let text = root.outline();
        assert_eq!(
            text,
            "[]\nFields: 2\n    [dup]\n    Fields: 0\n    [dup]\n    Fields: 1\n"
        );
    }
}
