//! Generates a strongly-typed GraphQL client from a schema document
//! (spec.md §1): pure functions from a parsed [`graphql_parser`] schema to
//! generated source text, with no I/O, logging, or network access of its
//! own (spec.md §1, §6 Non-goals).
//!
//! Grounded on `litho-codegen`'s crate root (`src/lib.rs`): a thin dispatch
//! layer over a single codegen module, re-exporting the error type and
//! entry point. This crate has only one target instead of a per-extension
//! dispatch table, so the dispatch collapses to a direct call.

mod config;
mod document_emitter;
mod error;
mod field_emitter;
mod name_mangler;
mod scalar_resolver;
mod text;
mod type_emitter;
mod type_printer;

pub use config::Configuration;
pub use error::{CodegenError, FormatError, IdentityFormatter, SourceFormatter};

use graphql_parser::schema::Document;

/// Generates source files for `document` under `config`, per spec.md §6.
///
/// Returns one `("Client", text)` pair when `config.split_files` is
/// `false`, or a `("package", text)` pair followed by one pair per
/// top-level declaration (alphabetical by name) when it is `true`. Each
/// file's text is passed through [`IdentityFormatter`] when
/// `config.enable_fmt` is set.
pub fn write(document: &Document<'static, String>, config: &Configuration) -> Result<Vec<(String, String)>, CodegenError> {
    write_with_formatter(document, config, &IdentityFormatter)
}

/// As [`write`], but runs each file's generated text through `formatter`
/// instead of the built-in [`IdentityFormatter`] when `config.enable_fmt`
/// is set.
pub fn write_with_formatter(
    document: &Document<'static, String>,
    config: &Configuration,
    formatter: &dyn SourceFormatter,
) -> Result<Vec<(String, String)>, CodegenError> {
    let files = document_emitter::emit(document, config);

    if !config.enable_fmt {
        return Ok(files);
    }

    files
        .into_iter()
        .map(|(name, source)| {
            formatter
                .format(&name, &source)
                .map(|formatted| (name.clone(), formatted))
                .map_err(|err| CodegenError::Format(name, err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_parser::schema::parse_schema;

    fn parse(sdl: &str) -> Document<'static, String> {
        parse_schema::<String>(sdl).unwrap().into_static()
    }

    #[test]
    fn write_generates_a_single_client_file_by_default() {
        let document = parse("type Query { hello: String! }");
        let config = Configuration::default();
        let files = write(&document, &config).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "Client");
        assert!(files[0].1.contains("object Query"));
    }

    #[test]
    fn write_is_deterministic() {
        let document = parse("type Query { hello: String! name(id: ID!): String }");
        let config = Configuration::default();
        assert_eq!(write(&document, &config).unwrap(), write(&document, &config).unwrap());
    }

    #[test]
    fn split_files_on_an_empty_document_returns_just_the_package_file() {
        let document = parse("scalar Unused");
        let config = Configuration::new().with_scalar_mapping("Unused", "String").with_split_files(true);
        let files = write(&document, &config).unwrap();
        assert_eq!(files, vec![("package".to_string(), "package object client {\n\n}\n".to_string())]);
    }
}
