//! The FBI lexer/parser state machine.
//!
//! A single left-to-right pass walks the source character by character,
//! driving a five-state machine:
//!
//! - `Content`: between constructs; expects whitespace, `[`, `}`, or the
//!   first character of a field name.
//! - `HeaderStart`: collecting the name between `[` and `]`.
//! - `HeaderEnd`: after `]`, expects `{`.
//! - `FieldName`: collecting the name before `=`.
//! - `FieldValue`: collecting the text before `;` (symbols are literal here).
//!
//! The machine uses one character of lookahead to validate whitespace
//! placement inside names, and a fixed-length lookahead to match comment
//! markers. Comment markers are matched within a single line; block-comment
//! state persists across lines. The first rule violation halts the parse
//! and is returned as the error.

use crate::error::{Location, ParseError, Result};
use crate::section::{Field, Section};

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Optional pure text transform applied once to a finalized header, field
/// name, or field value. Hooks only ever see final trimmed text, never a
/// partially-accumulated buffer.
pub type FormatHook = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Parser configuration.
///
/// Concurrent parses sharing one `ParserOptions` are safe as long as the
/// hooks are side-effect-free; the parser itself keeps no state between
/// calls.
pub struct ParserOptions {
    /// When false, a stray `;` at content scope is skipped instead of
    /// rejected. Defaults to true.
    pub strict: bool,
    pub format_header: Option<FormatHook>,
    pub format_field_name: Option<FormatHook>,
    pub format_field_value: Option<FormatHook>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict: true,
            format_header: None,
            format_field_name: None,
            format_field_value: None,
        }
    }
}

impl ParserOptions {
    /// Disable strict mode: tolerate stray `;` terminators at content scope.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Transform applied to each section header, e.g. forcing lowercase.
    pub fn format_header(mut self, hook: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.format_header = Some(Box::new(hook));
        self
    }

    /// Transform applied to each field name.
    pub fn format_field_name(
        mut self,
        hook: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format_field_name = Some(Box::new(hook));
        self
    }

    /// Transform applied to each field value.
    pub fn format_field_value(
        mut self,
        hook: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format_field_value = Some(Box::new(hook));
        self
    }
}

/// Parse an FBI document with default options.
pub fn parse(input: &str) -> Result<Section> {
    parse_with_options(input, &ParserOptions::default())
}

/// Parse an FBI document, returning the root section or the first error.
///
/// The input is consumed exactly once. Empty input is valid and yields an
/// empty root.
pub fn parse_with_options(input: &str, options: &ParserOptions) -> Result<Section> {
    let mut machine = Machine::new(options);

    for (line_idx, line) in input.split('\n').enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let mut col = 0;

        while col < chars.len() {
            // Comment markers take priority over state dispatch. A marker
            // never matches across a line break.
            if machine.in_block_comment {
                if word_match(BLOCK_COMMENT_CLOSE, &chars, col) {
                    machine.in_block_comment = false;
                    col += BLOCK_COMMENT_CLOSE.len();
                } else {
                    col += 1;
                }
                continue;
            }
            if word_match(BLOCK_COMMENT_OPEN, &chars, col) {
                machine.in_block_comment = true;
                col += BLOCK_COMMENT_OPEN.len();
                continue;
            }
            if word_match(LINE_COMMENT, &chars, col) {
                // Discard the rest of the line.
                break;
            }

            let ch = chars[col];
            let next = chars.get(col + 1).copied();
            machine.step(ch, next, Location::new(line_idx + 1, col + 1))?;
            col += 1;
        }
    }

    machine.finish()
}

/// The structural symbols of the format.
fn is_symbol(ch: char) -> bool {
    matches!(ch, '[' | ']' | '{' | '}' | '=' | ';')
}

/// Whitespace for dispatch purposes: Unicode whitespace or the NUL sentinel.
fn is_space(ch: char) -> bool {
    ch == '\0' || ch.is_whitespace()
}

/// Test whether `word` appears in `line` starting at `at`, without running
/// past the end of the line.
fn word_match(word: &str, line: &[char], at: usize) -> bool {
    word.chars()
        .enumerate()
        .all(|(i, w)| line.get(at + i) == Some(&w))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Content,
    HeaderStart,
    HeaderEnd,
    FieldName,
    FieldValue,
}

/// In-progress parse: the active state, the accumulator buffers, and the
/// stack of open sections.
struct Machine<'a> {
    options: &'a ParserOptions,
    state: State,
    /// Open sections; the first element is the root, the last is the
    /// section receiving new fields and children. A finished child is
    /// appended to its parent when its `}` is consumed.
    stack: Vec<Section>,
    header: String,
    field_name: String,
    field_value: String,
    in_block_comment: bool,
}

impl<'a> Machine<'a> {
    fn new(options: &'a ParserOptions) -> Self {
        Self {
            options,
            state: State::Content,
            stack: vec![Section::default()],
            header: String::new(),
            field_name: String::new(),
            field_value: String::new(),
            in_block_comment: false,
        }
    }

    fn step(&mut self, ch: char, next: Option<char>, at: Location) -> Result<()> {
        match self.state {
            State::Content => self.scan_content(ch, at),
            State::HeaderStart => self.scan_header_name(ch, next, at),
            State::HeaderEnd => self.scan_header_end(ch, at),
            State::FieldName => self.scan_field_name(ch, next, at),
            State::FieldValue => {
                self.scan_field_value(ch);
                Ok(())
            }
        }
    }

    fn scan_content(&mut self, ch: char, at: Location) -> Result<()> {
        if is_space(ch) {
            return Ok(());
        }
        match ch {
            '[' => {
                self.state = State::HeaderStart;
                self.header.clear();
            }
            '{' => return Err(ParseError::UnexpectedCharacter { ch, at }),
            '}' => {
                if self.stack.len() == 1 {
                    return Err(ParseError::UnmatchedClose { ch, at });
                }
                if let Some(done) = self.stack.pop() {
                    if let Some(parent) = self.stack.last_mut() {
                        parent.children.push(done);
                    }
                }
            }
            _ if is_symbol(ch) => {
                if self.options.strict || ch != ';' {
                    return Err(ParseError::UnexpectedCharacter { ch, at });
                }
                // Lenient mode swallows stray terminators.
            }
            _ => {
                self.state = State::FieldName;
                self.field_name.clear();
                self.field_name.push(ch);
            }
        }
        Ok(())
    }

    fn scan_header_name(&mut self, ch: char, next: Option<char>, at: Location) -> Result<()> {
        if is_space(ch) {
            // Whitespace after the name is only a separator when the name
            // ends here: more whitespace or `]` must follow on this line.
            let at_boundary = matches!(next, Some(c) if is_space(c) || c == ']');
            if !self.header.is_empty() && !at_boundary {
                return Err(ParseError::WhitespaceInHeader { ch, at });
            }
            return Ok(());
        }
        match ch {
            ']' => {
                let name = self.header.trim();
                let name = match &self.options.format_header {
                    Some(hook) => hook(name),
                    None => name.to_string(),
                };
                self.stack.push(Section::new(name));
                self.state = State::HeaderEnd;
            }
            _ if is_symbol(ch) => return Err(ParseError::SymbolInHeader { ch, at }),
            _ => self.header.push(ch),
        }
        Ok(())
    }

    fn scan_header_end(&mut self, ch: char, at: Location) -> Result<()> {
        if is_space(ch) {
            return Ok(());
        }
        if ch == '{' {
            self.state = State::Content;
            return Ok(());
        }
        Err(ParseError::UnexpectedCharacter { ch, at })
    }

    fn scan_field_name(&mut self, ch: char, next: Option<char>, at: Location) -> Result<()> {
        if is_space(ch) {
            let at_boundary = matches!(next, Some(c) if is_space(c) || c == '=');
            if !at_boundary {
                return Err(ParseError::WhitespaceInFieldName { ch, at });
            }
            return Ok(());
        }
        match ch {
            '=' => {
                self.state = State::FieldValue;
                self.field_value.clear();
            }
            _ if is_symbol(ch) => return Err(ParseError::InvalidFieldDefinition { ch, at }),
            _ => self.field_name.push(ch),
        }
        Ok(())
    }

    fn scan_field_value(&mut self, ch: char) {
        if ch != ';' {
            // Only `;` terminates a value; symbols and whitespace are
            // literal content.
            self.field_value.push(ch);
            return;
        }

        let value = self.field_value.trim();
        let value = match &self.options.format_field_value {
            Some(hook) => hook(value),
            None => value.to_string(),
        };
        // The name buffer never holds boundary whitespace: whitespace
        // characters are skipped, not accumulated.
        let name = match &self.options.format_field_name {
            Some(hook) => hook(&self.field_name),
            None => self.field_name.clone(),
        };
        if let Some(section) = self.stack.last_mut() {
            section.fields.push(Field { name, value });
        }
        self.state = State::Content;
    }

    fn finish(mut self) -> Result<Section> {
        if self.state != State::Content || self.stack.len() != 1 {
            return Err(ParseError::Incomplete);
        }
        Ok(self.stack.pop().unwrap_or_default())
    }
}
