//! Generated-script assembly.
//!
//! The rendering runtime parses the emitted text structurally, so the
//! contracts here are byte-level: `#.####` number formatting, single-quoted
//! string literals with escapes, and a column-tracking writer that the
//! record emitter uses for its 120-column soft wrap.

use std::fmt;

/// Soft wrap threshold for emitted data lines, in columns.
pub const WRAP_COLUMN: usize = 120;

const INDENT: &str = "  ";

/// Incremental writer for generated script text.
///
/// Tracks the current column (for wrap decisions) and an indentation level
/// applied at the start of each line. Chained-call continuations are written
/// one level deeper than the surrounding statement.
#[derive(Debug, Default)]
pub struct ScriptWriter {
    buf: String,
    column: usize,
    indent: usize,
}

impl ScriptWriter {
    pub fn new() -> ScriptWriter {
        ScriptWriter::default()
    }

    /// Column the next character would land in.
    pub fn current_column(&self) -> usize {
        self.column
    }

    /// Append text to the current line, indenting first if the line is empty.
    pub fn add(&mut self, text: &str) -> &mut ScriptWriter {
        if self.column == 0 && !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.column = self.indent * INDENT.len();
        }
        self.buf.push_str(text);
        self.column += text.chars().count();
        self
    }

    /// End the current line if anything is on it.
    pub fn on_new_line(&mut self) -> &mut ScriptWriter {
        if self.column != 0 {
            self.buf.push('\n');
            self.column = 0;
        }
        self
    }

    /// Write a `// ...` comment on its own line.
    pub fn comment(&mut self, text: &str) -> &mut ScriptWriter {
        self.on_new_line();
        self.add("// ").add(text);
        self.buf.push('\n');
        self.column = 0;
        self
    }

    /// Continue a chained call: new line, one extra indent level, `.text`.
    pub fn add_chained(&mut self, text: &str) -> &mut ScriptWriter {
        self.on_new_line();
        for _ in 0..self.indent + 1 {
            self.buf.push_str(INDENT);
        }
        self.column = (self.indent + 1) * INDENT.len();
        self.buf.push('.');
        self.column += 1;
        self.add(text)
    }

    /// Terminate the current statement with `;` and end the line.
    pub fn end_statement(&mut self) -> &mut ScriptWriter {
        self.buf.push(';');
        self.buf.push('\n');
        self.column = 0;
        self
    }

    pub fn indent_more(&mut self) -> &mut ScriptWriter {
        self.indent += 1;
        self
    }

    pub fn indent_less(&mut self) -> &mut ScriptWriter {
        self.indent = self.indent.saturating_sub(1);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer and return the accumulated script text.
    pub fn finish(self) -> String {
        self.buf
    }
}

impl fmt::Display for ScriptWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Format a number with at most 4 fractional digits, trailing zeros and a
/// dangling decimal point trimmed (`3` not `3.0000`, `3.5` not `3.5000`).
pub fn fmt_num(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

/// Quote text as a single-quoted script string literal.
///
/// Backslashes, quotes, and control characters are escaped so that
/// re-parsing the literal yields the original text unchanged.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
