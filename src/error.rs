//! Error types and the formatter collaborator contract (spec.md §5, §6).
//!
//! Grounded on `litho-codegen`'s `TypescriptError` (`src/typescript/mod.rs`):
//! a small hand-rolled enum with manual `Display`/`Error` impls, no
//! `thiserror`, matching the rest of the teacher's error handling.

use std::fmt;

/// Everything that can go wrong turning a schema document into source text.
/// `write`/`write_with_formatter` are pure and always produce output; the
/// only failure this crate itself surfaces is a formatter rejecting one of
/// the generated files (spec.md §7 — unknown scalars and directive misuse
/// degrade silently, they are not errors).
#[derive(Debug)]
pub enum CodegenError {
    /// The external formatter returned an error for one of the generated
    /// files.
    Format(String, FormatError),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Format(file, err) => write!(f, "formatting `{file}` failed: {err}"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Format(_, err) => Some(err),
        }
    }
}

/// An error surfaced by a [`crate::SourceFormatter`] implementation.
#[derive(Debug)]
pub struct FormatError(pub String);

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FormatError {}

/// The external collaborator spec.md §5 calls out explicitly: a pluggable
/// formatting pass applied to each generated file's source text before it
/// is returned. [`crate::write`] uses the no-op [`IdentityFormatter`];
/// callers that want `scalafmt`-shaped output supply their own.
pub trait SourceFormatter {
    fn format(&self, file_name: &str, source: &str) -> Result<String, FormatError>;
}

/// The formatter [`crate::write`] uses: returns its input unchanged.
pub struct IdentityFormatter;

impl SourceFormatter for IdentityFormatter {
    fn format(&self, _file_name: &str, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}
