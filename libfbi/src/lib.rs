//! FBI structured-text configuration parser.
//!
//! FBI documents are nested named sections containing string-valued fields:
//!
//! ```text
//! // server settings
//! [server]{
//!     host = localhost;
//!     port = 8080;
//!     [limits]{
//!         connections = 64;
//!     }
//! }
//! ```
//!
//! # Parsing
//!
//! [`parse`] walks the raw text in a single pass with a hand-written
//! five-state machine, building the [`Section`] tree as nesting deepens and
//! reporting the first rule violation as a [`ParseError`] with a 1-based
//! line/column position. Comments (`//` and `/* */`) are transparent to the
//! tree produced. [`parse_with_options`] additionally accepts
//! [`ParserOptions`]: a lenient mode that tolerates stray `;` terminators,
//! and optional formatting hooks applied once to each finalized header,
//! field name, and field value.
//!
//! # Inspecting the tree
//!
//! [`Section::value`] and [`Section::child`] return the first match in file
//! order; duplicates are retained, never merged. [`Section::to_raw`]
//! converts the tree to a generic insertion-ordered mapping, and
//! [`encode_json`] renders that mapping as JSON text.

mod encode;
mod error;
mod parser;
mod raw;
mod section;

pub use encode::encode_json;
pub use error::{Location, ParseError, Result};
pub use parser::{parse_with_options, FormatHook, ParserOptions};
pub use raw::{RawMap, RawValue};
pub use section::{Field, Section};

/// Parse an FBI document with default options.
///
/// # Example
///
/// ```
/// let root = libfbi::parse("[server]{ port = 8080; }").unwrap();
/// let server = root.child("server").unwrap();
/// assert_eq!(server.value("port"), Some("8080"));
/// ```
pub fn parse(input: &str) -> Result<Section> {
    parser::parse(input)
}
