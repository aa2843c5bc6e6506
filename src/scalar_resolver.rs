//! Maps a GraphQL scalar (and redirected enum) name to a target type
//! expression (spec.md §4.3).
//!
//! Grounded on `litho-codegen`'s built-in-scalar match inside `write_type`
//! (`"Boolean" => "boolean"`, `"Int" | "Float" => "number"`, …), extended
//! with the `Configuration.scalar_mappings` lookup spec.md §4.3 requires.

use crate::config::Configuration;
use crate::name_mangler::mangle_accessor_name;

/// Resolves `name` to a target type expression, per spec.md §4.3:
/// 1. an explicit `scalarMappings` entry wins outright (scalars and
///    mapping-redirected enums alike);
/// 2. otherwise a built-in GraphQL scalar resolves to its target built-in;
/// 3. otherwise the mangled declaration name is used as a type reference.
pub fn resolve(name: &str, config: &Configuration) -> String {
    if let Some(mapped) = config.scalar_mappings.get(name) {
        return mapped.clone();
    }

    match name {
        "Int" => "Int".to_string(),
        "Float" => "Double".to_string(),
        "String" => "String".to_string(),
        "Boolean" => "Boolean".to_string(),
        "ID" => "String".to_string(),
        _ => mangle_accessor_name(name),
    }
}

/// True when `name` has an explicit scalar mapping, meaning the
/// corresponding declaration (if any) must be suppressed at emission time.
pub fn is_mapped(name: &str, config: &Configuration) -> bool {
    config.scalar_mappings.contains_key(name)
}
