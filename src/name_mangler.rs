//! Deterministic identifier rewriting (spec.md §4.2).
//!
//! No teacher module corresponds to this one directly — `litho-codegen`'s
//! TypeScript target needs none of this, since every GraphQL name it handles
//! is already a legal JS identifier. The collision-suffixing idiom below
//! (`_1`, `_2`, … assigned in source order, first occurrence unchanged) is
//! grounded on `examples/other_examples/370a7139_ParapluOU-terminusdb-rs__…`'s
//! `sanitize_type_name`/`sanitize_enum_variant` helpers, which solve the same
//! problem for a different target.

use std::collections::HashMap;

/// Target-language (Scala) reserved words that cannot be used bare as an
/// identifier in value position.
const RESERVED: &[&str] = &[
    "abstract", "case", "catch", "class", "def", "do", "else", "extends",
    "false", "final", "finally", "for", "forSome", "if", "implicit",
    "import", "lazy", "macro", "match", "new", "null", "object", "override",
    "package", "private", "protected", "return", "sealed", "super", "this",
    "throw", "trait", "try", "true", "type", "val", "var", "while", "with",
    "yield", "wait", "notify", "notifyAll", "equals", "hashCode",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// True when `name`'s leading/trailing underscores require quoting under
/// spec.md §4.2 rule 2. A single leading underscore followed by a letter
/// (`_nickname`) is accepted bare.
pub fn needs_underscore_quoting(name: &str) -> bool {
    if name.ends_with('_') {
        return true;
    }
    if !name.starts_with('_') {
        return false;
    }
    let bare_leading = name.len() > 1
        && !name[1..].starts_with('_')
        && name.as_bytes().get(1).is_some_and(|b| b.is_ascii_alphabetic());
    !bare_leading
}

/// Mangles `raw` for use as a method/type identifier (value position):
/// reserved words and underscore-edge names are backtick-quoted.
pub fn mangle_accessor_name(raw: &str) -> String {
    if is_reserved(raw) || needs_underscore_quoting(raw) {
        format!("`{raw}`")
    } else {
        raw.to_string()
    }
}

/// As [`mangle_accessor_name`], but for a declaration position immediately
/// followed by a colon (e.g. a parameter name): a trailing underscore needs
/// a separating space before the colon (spec.md §4.2 rule 2).
pub fn mangle_accessor_name_before_colon(raw: &str) -> String {
    let mangled = mangle_accessor_name(raw);
    if mangled.starts_with('`') && raw.ends_with('_') {
        format!("{mangled} ")
    } else {
        mangled
    }
}

/// Mangles `raw` for use as a case-class / record field name: reserved
/// words get a `$` marker suffix instead of backtick quoting (spec.md
/// §4.2 rule 1), underscore-edge names are still backtick-quoted.
pub fn mangle_record_field_name(raw: &str) -> String {
    if needs_underscore_quoting(raw) {
        format!("`{raw}`")
    } else if is_reserved(raw) {
        format!("{raw}$")
    } else {
        raw.to_string()
    }
}

/// Resolves case-insensitive sibling collisions (spec.md §4.2 rule 3):
/// names that fold to the same ASCII-lowercase string get `_1`, `_2`, …
/// suffixed onto every occurrence after the first, in source order. The
/// wire string a caller threads through separately is never touched.
pub fn dedupe_siblings<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<String, u32> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let key = name.to_ascii_lowercase();
            let count = seen.entry(key).or_insert(0);
            let result = if *count == 0 {
                name.to_string()
            } else {
                format!("{name}_{count}")
            };
            *count += 1;
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_word_is_backtick_quoted_as_accessor() {
        assert_eq!(mangle_accessor_name("type"), "`type`");
        assert_eq!(mangle_accessor_name("characters"), "characters");
    }

    #[test]
    fn reserved_word_gets_marker_suffix_as_record_field() {
        assert_eq!(mangle_record_field_name("wait"), "wait$");
        assert_eq!(mangle_record_field_name("type"), "type$");
        assert_eq!(mangle_record_field_name("characters"), "characters");
    }

    #[test]
    fn single_leading_underscore_before_letter_is_bare() {
        assert!(!needs_underscore_quoting("_nickname"));
        assert_eq!(mangle_accessor_name("_nickname"), "_nickname");
    }

    #[test]
    fn leading_and_trailing_underscores_are_quoted() {
        assert!(needs_underscore_quoting("_name_"));
        assert!(needs_underscore_quoting("__foo"));
        assert!(needs_underscore_quoting("foo_"));
        assert_eq!(mangle_accessor_name("_name_"), "`_name_`");
    }

    #[test]
    fn trailing_underscore_needs_a_space_before_colon() {
        assert_eq!(mangle_accessor_name_before_colon("_name_"), "`_name_` ");
        assert_eq!(mangle_accessor_name_before_colon("name"), "name");
    }

    #[test]
    fn case_insensitive_duplicates_get_suffixed_in_source_order() {
        let result = dedupe_siblings(["NEWHOPE", "EMPIRE", "JEDI", "jedi"]);
        assert_eq!(result, vec!["NEWHOPE", "EMPIRE", "JEDI", "jedi_1"]);
    }

    #[test]
    fn three_way_collision_increments_the_suffix() {
        let result = dedupe_siblings(["Foo", "foo", "FOO"]);
        assert_eq!(result, vec!["Foo", "foo_1", "FOO_2"]);
    }

    #[test]
    fn no_collision_leaves_names_untouched() {
        let result = dedupe_siblings(["Alpha", "Beta", "Gamma"]);
        assert_eq!(result, vec!["Alpha", "Beta", "Gamma"]);
    }
}
