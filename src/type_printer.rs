//! Renders a GraphQL type reference as a target type expression and a
//! matching `FieldBuilder` expression simultaneously (spec.md §4.1).
//!
//! Grounded on `litho-codegen`'s `write_type` (`src/typescript/generator.rs`),
//! which walks the identical `Named | NonNull | List` tree shape to lower a
//! type reference into TypeScript; the wrapper constructors and the
//! "bare-is-optional" rule are new, per spec.md §4.1.

use graphql_parser::schema::Type;

/// Lowers `ty` into `(target type expression, FieldBuilder expression)`,
/// given the leaf pair to substitute at the `Named` position (e.g.
/// `("String", "Scalar()")` for a scalar field, or `("A", "Obj(innerSelection)")`
/// for a composite field whose inner selection fixes the generic parameter).
///
/// A bare type (no enclosing `NonNull`) is optional; `NonNull` strips exactly
/// the wrapper that would otherwise apply at that position. Nesting through
/// `List` is preserved exactly, per the worked examples in spec.md §4.1:
/// `[String]!` -> `List[Option[String]]` / `ListOf(OptionOf(Scalar()))`,
/// `[String!]!` -> `List[String]` / `ListOf(Scalar())`.
pub fn lower(ty: &Type<'static, String>, leaf_target: &str, leaf_builder: &str) -> (String, String) {
    lower_in_context(ty, true, leaf_target, leaf_builder)
}

fn lower_in_context(
    ty: &Type<'static, String>,
    optional_context: bool,
    leaf_target: &str,
    leaf_builder: &str,
) -> (String, String) {
    match ty {
        Type::NonNullType(inner) => lower_in_context(inner, false, leaf_target, leaf_builder),
        Type::ListType(inner) => {
            let (it, ib) = lower_in_context(inner, true, leaf_target, leaf_builder);
            let wrapped = (format!("List[{it}]"), format!("ListOf({ib})"));
            wrap_if_optional(wrapped, optional_context)
        }
        Type::NamedType(_) => {
            wrap_if_optional((leaf_target.to_string(), leaf_builder.to_string()), optional_context)
        }
    }
}

fn wrap_if_optional(pair: (String, String), optional: bool) -> (String, String) {
    if optional {
        (format!("Option[{}]", pair.0), format!("OptionOf({})", pair.1))
    } else {
        pair
    }
}

/// True when `ty` is nullable at the top level (not directly wrapped in
/// `NonNull`) — the lowered form will be `Option[...]` at its outermost layer.
pub fn is_nullable(ty: &Type<'static, String>) -> bool {
    !matches!(ty, Type::NonNullType(_))
}

/// True when `ty`'s outermost shape (after stripping one top-level
/// `NonNull`, if present) is a list.
pub fn is_list(ty: &Type<'static, String>) -> bool {
    match ty {
        Type::NonNullType(inner) => matches!(**inner, Type::ListType(_)),
        Type::ListType(_) => true,
        Type::NamedType(_) => false,
    }
}

/// The innermost named type this reference ultimately points at.
pub fn named_type(ty: &Type<'static, String>) -> &str {
    match ty {
        Type::NonNullType(inner) | Type::ListType(inner) => named_type(inner),
        Type::NamedType(name) => name.as_str(),
    }
}

/// Reproduces the GraphQL type literal verbatim (e.g. `Int!`, `[String]!`),
/// for use in the wire-visible `Argument(...)` type-literal slot.
pub fn to_sdl(ty: &Type<'static, String>) -> String {
    match ty {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner) => format!("[{}]", to_sdl(inner)),
        Type::NonNullType(inner) => format!("{}!", to_sdl(inner)),
    }
}

/// The default parameter value for an argument of this type, per spec.md
/// §4.4: nullable arguments default to `None`, otherwise-required list
/// arguments default to `Nil`. A required scalar/enum/input has no default.
pub fn argument_default(ty: &Type<'static, String>) -> Option<&'static str> {
    if is_nullable(ty) {
        Some("None")
    } else if is_list(ty) {
        Some("Nil")
    } else {
        None
    }
}
