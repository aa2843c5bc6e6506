//! A small fluent text buffer used by every emitter.
//!
//! Mirrors the teacher's `SourceMapped` chaining style (`self.dts.text("...")
//! .token(...)`) without the source-map bookkeeping, which this crate has no
//! use for: the formatter collaborator works on plain text.

#[derive(Debug, Default, Clone)]
pub struct CodeWriter {
    buf: String,
}

impl CodeWriter {
    pub fn new() -> Self {
        CodeWriter { buf: String::new() }
    }

    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl From<CodeWriter> for String {
    fn from(value: CodeWriter) -> Self {
        value.buf
    }
}

/// Indents every non-empty line of `body` by `width` spaces.
pub fn indent(body: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
