//! Per-kind top-level declaration emission (spec.md §4.3, §4.5): the phantom
//! type plus, where the kind carries one, the accompanying object/class body.
//!
//! Grounded on `litho-codegen`'s per-kind dispatch in `generate`
//! (`process_object` / `process_interface` / `process_enum` / `process_input`),
//! which walks the same five `TypeDefinition` variants one at a time and
//! renders each independently; the target vocabulary (`SelectionBuilder`,
//! `ArgEncoder`, `ScalarDecoder`, `__Value`) is new, per spec.md §4.3/§4.5.

use graphql_parser::schema::{EnumType, InputObjectType, InterfaceType, ObjectType, TypeDefinition};

use crate::config::Configuration;
use crate::document_emitter::SchemaIndex;
use crate::field_emitter;
use crate::name_mangler::{self, mangle_record_field_name};
use crate::scalar_resolver;
use crate::text;
use crate::type_printer;

/// What a single top-level declaration contributes to the output: a
/// package-object-level phantom line (empty for kinds that need none — enums
/// and input objects are fully self-contained in their own `body`) and,
/// where the kind carries one, the accompanying `object`/`class` body
/// (absent for unions, which have no standalone declaration).
pub struct Rendered {
    pub phantom: String,
    pub body: Option<String>,
    pub has_field_builder: bool,
    pub has_value: bool,
}

/// Renders `definition`, or returns `None` when the kind has no standalone
/// declaration: unions (spec.md §4.5 handles them entirely inside the
/// owning object's field accessor) and custom scalars (spec.md §7 — an
/// unmapped scalar is left undeclared on purpose, so every reference to it
/// fails downstream compilation with a clear "type not found" error rather
/// than silently type-checking against a manufactured alias).
pub fn emit_type(
    definition: &TypeDefinition<'static, String>,
    raw_name: &str,
    mangled_name: &str,
    schema: &SchemaIndex,
    config: &Configuration,
) -> Option<Rendered> {
    match definition {
        TypeDefinition::Object(obj) => Some(emit_object(obj, raw_name, mangled_name, schema, config)),
        TypeDefinition::Interface(iface) => Some(emit_interface(iface, raw_name, mangled_name, schema, config)),
        TypeDefinition::Enum(e) => Some(emit_enum(e, mangled_name, config)),
        TypeDefinition::InputObject(input) => Some(emit_input(input, mangled_name, config)),
        TypeDefinition::Union(_) => None,
        TypeDefinition::Scalar(_) => None,
    }
}

fn render_type_docstring(description: Option<&str>) -> Option<String> {
    description.map(|d| format!("/** {d} */\n"))
}

fn emit_object(
    obj: &ObjectType<'static, String>,
    raw_name: &str,
    mangled_name: &str,
    schema: &SchemaIndex,
    config: &Configuration,
) -> Rendered {
    let owner_expr = schema.owner_expr(raw_name, mangled_name);
    let is_root = schema.root_aliases.contains_key(raw_name);

    let mut phantom = String::new();
    if let Some(doc) = render_type_docstring(obj.description.as_deref()) {
        phantom.push_str(&doc);
    }
    if is_root {
        phantom.push_str(&format!("type {mangled_name} = {owner_expr}"));
    } else {
        phantom.push_str(&format!("type {mangled_name}"));
    }

    let field_names = name_mangler::dedupe_siblings(obj.fields.iter().map(|f| f.name.as_str()));
    let mut field_blocks = Vec::with_capacity(obj.fields.len());
    for (field, sibling_name) in obj.fields.iter().zip(field_names.iter()) {
        let rendered = field_emitter::emit_field(field, &owner_expr, schema, config);
        field_blocks.push(rename_accessor(&rendered, &field.name, sibling_name));
    }

    let body = format!("object {mangled_name} {{\n{}\n}}", text::indent(&field_blocks.join("\n\n"), 2));

    Rendered { phantom, body: Some(body), has_field_builder: true, has_value: false }
}

fn emit_interface(
    iface: &InterfaceType<'static, String>,
    raw_name: &str,
    mangled_name: &str,
    schema: &SchemaIndex,
    config: &Configuration,
) -> Rendered {
    let owner_expr = schema.owner_expr(raw_name, mangled_name);

    let mut phantom = String::new();
    if let Some(doc) = render_type_docstring(iface.description.as_deref()) {
        phantom.push_str(&doc);
    }
    phantom.push_str(&format!("type {mangled_name}"));

    let field_names = name_mangler::dedupe_siblings(iface.fields.iter().map(|f| f.name.as_str()));
    let mut field_blocks = Vec::with_capacity(iface.fields.len());
    for (field, sibling_name) in iface.fields.iter().zip(field_names.iter()) {
        let rendered = field_emitter::emit_field(field, &owner_expr, schema, config);
        field_blocks.push(rename_accessor(&rendered, &field.name, sibling_name));
    }

    let body = format!("object {mangled_name} {{\n{}\n}}", text::indent(&field_blocks.join("\n\n"), 2));

    Rendered { phantom, body: Some(body), has_field_builder: true, has_value: false }
}

/// A field's own name always wins the accessor identifier unless a sibling
/// collision forced a suffix (spec.md §4.2 rule 3) — `rendered` was built
/// against the unsuffixed mangled name, so only patch it when they differ.
fn rename_accessor(rendered: &str, raw_field_name: &str, sibling_name: &str) -> String {
    if sibling_name == raw_field_name {
        return rendered.to_string();
    }
    let original = name_mangler::mangle_accessor_name(raw_field_name);
    let replacement = name_mangler::mangle_accessor_name(sibling_name);
    // Patches every `def <accessor>...` head in this field's block (the
    // exhaustive/Option/Interface variants for union and interface fields
    // all share the same accessor prefix).
    rendered.replace(&format!("def {original}"), &format!("def {replacement}"))
}

fn emit_enum(e: &EnumType<'static, String>, mangled_name: &str, config: &Configuration) -> Rendered {
    let mut out = String::new();
    if let Some(doc) = render_type_docstring(e.description.as_deref()) {
        out.push_str(&doc);
    }
    out.push_str(&format!("sealed trait {mangled_name} extends scala.Product with scala.Serializable\n"));
    out.push_str(&format!("object {mangled_name} {{\n"));

    let value_names = name_mangler::dedupe_siblings(e.values.iter().map(|v| v.name.as_str()));
    let mut cases = Vec::with_capacity(e.values.len());
    for (value, sibling_name) in e.values.iter().zip(value_names.iter()) {
        let case_name = mangle_record_field_name(sibling_name);
        if let Some(doc) = render_type_docstring(value.description.as_deref()) {
            cases.push(doc.trim_end().to_string());
        }
        if let Some(dep) = field_emitter_deprecation(&value.directives) {
            cases.push(dep);
        }
        cases.push(format!("case object {case_name} extends {mangled_name}"));
    }
    if config.extensible_enums {
        cases.push(format!("final case class __Unknown(value: String) extends {mangled_name}"));
    }
    out.push_str(&text::indent(&cases.join("\n"), 2));
    out.push('\n');

    let mut decoder_arms: Vec<String> = e
        .values
        .iter()
        .zip(value_names.iter())
        .map(|(value, sibling_name)| {
            format!(
                "case __Value.__StringValue(\"{}\") => Right({mangled_name}.{})",
                value.name,
                mangle_record_field_name(sibling_name)
            )
        })
        .collect();
    if config.extensible_enums {
        decoder_arms.push(format!(
            "case __Value.__StringValue(other) => Right({mangled_name}.__Unknown(other))"
        ));
    }
    decoder_arms.push(format!("case other => Left(DecodingError(s\"Can't build {mangled_name} from input $other\"))"));

    let mut encoder_arms: Vec<String> = e
        .values
        .iter()
        .zip(value_names.iter())
        .map(|(value, sibling_name)| {
            format!(
                "case {mangled_name}.{} => __Value.__EnumValue(\"{}\")",
                mangle_record_field_name(sibling_name),
                value.name
            )
        })
        .collect();
    if config.extensible_enums {
        encoder_arms.push(format!("case {mangled_name}.__Unknown(value) => __Value.__EnumValue(value)"));
    }

    let values_list = e
        .values
        .iter()
        .zip(value_names.iter())
        .map(|(_, n)| format!("{mangled_name}.{}", mangle_record_field_name(n)))
        .collect::<Vec<_>>()
        .join(", ");

    out.push('\n');
    out.push_str(&text::indent(
        &format!(
            "implicit val decoder: ScalarDecoder[{mangled_name}] = {{\n{}\n}}\n\nimplicit val encoder: ArgEncoder[{mangled_name}] = {{\n{}\n}}\n\nval values: List[{mangled_name}] = List({values_list})",
            text::indent(&decoder_arms.join("\n"), 2),
            text::indent(&encoder_arms.join("\n"), 2),
        ),
        2,
    ));
    out.push_str("\n}");

    Rendered { phantom: String::new(), body: Some(out), has_field_builder: false, has_value: true }
}

fn field_emitter_deprecation(directives: &[graphql_parser::schema::Directive<'static, String>]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find(|(name, _)| name == "reason")
        .and_then(|(_, value)| match value {
            graphql_parser::schema::Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_default();
    Some(format!("@deprecated(\"{reason}\", \"\")"))
}

fn emit_input(input: &InputObjectType<'static, String>, mangled_name: &str, config: &Configuration) -> Rendered {
    let mut out = String::new();
    if let Some(doc) = render_type_docstring(input.description.as_deref()) {
        out.push_str(&doc);
    }

    let field_names = name_mangler::dedupe_siblings(input.fields.iter().map(|f| f.name.as_str()));
    let params: Vec<String> = input
        .fields
        .iter()
        .zip(field_names.iter())
        .map(|(f, sibling_name)| {
            let leaf = scalar_resolver::resolve(type_printer::named_type(&f.value_type), config);
            let (target, _) = type_printer::lower(&f.value_type, &leaf, "");
            let ident = mangle_record_field_name(sibling_name);
            match type_printer::argument_default(&f.value_type) {
                Some(default) => format!("{ident}: {target} = {default}"),
                None => format!("{ident}: {target}"),
            }
        })
        .collect();

    out.push_str(&format!("final case class {mangled_name}(\n{}\n)\n", text::indent(&params.join(",\n"), 2)));
    out.push_str(&format!("object {mangled_name} {{\n"));

    let field_exprs: Vec<String> = input
        .fields
        .iter()
        .zip(field_names.iter())
        .map(|(f, sibling_name)| {
            let ident = mangle_record_field_name(sibling_name);
            let value_expr = input_field_value_expr(f, &ident, config);
            format!("\"{}\" -> {value_expr}", f.name)
        })
        .collect();

    out.push_str(&text::indent(
        &format!(
            "implicit val encoder: ArgEncoder[{mangled_name}] = {{\n  case value: {mangled_name} =>\n    __Value.__ObjectValue(List(\n{}\n    ))\n}}",
            text::indent(&field_exprs.join(",\n"), 6)
        ),
        2,
    ));
    out.push_str("\n}");

    Rendered { phantom: String::new(), body: Some(out), has_field_builder: false, has_value: true }
}

fn input_field_value_expr(
    field: &graphql_parser::schema::InputValue<'static, String>,
    ident: &str,
    config: &Configuration,
) -> String {
    let leaf = scalar_resolver::resolve(type_printer::named_type(&field.value_type), config);
    let is_list = type_printer::is_list(&field.value_type);
    let is_nullable = type_printer::is_nullable(&field.value_type);
    if is_list && is_nullable {
        format!(
            "value.{ident}.fold[__Value](__Value.__NullValue)(xs => __Value.__ListValue(xs.map(x => implicitly[ArgEncoder[{leaf}]].encode(x)).toList))"
        )
    } else if is_list {
        format!("__Value.__ListValue(value.{ident}.map(x => implicitly[ArgEncoder[{leaf}]].encode(x)).toList)")
    } else if is_nullable {
        format!("value.{ident}.fold(__Value.__NullValue: __Value)(x => implicitly[ArgEncoder[{leaf}]].encode(x))")
    } else {
        format!("implicitly[ArgEncoder[{leaf}]].encode(value.{ident})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_emitter::SchemaIndex;
    use graphql_parser::schema::parse_schema;

    fn index(sdl: &str) -> (graphql_parser::schema::Document<'static, String>, SchemaIndex) {
        let doc = parse_schema::<String>(sdl).unwrap().into_static();
        let idx = SchemaIndex::build(&doc);
        (doc, idx)
    }

    #[test]
    fn root_query_object_aliases_its_phantom_type() {
        let (doc, schema) = index("type Query { name: String! }");
        let config = Configuration::default();
        for def in &doc.definitions {
            if let graphql_parser::schema::Definition::TypeDefinition(graphql_parser::schema::TypeDefinition::Object(obj)) = def {
                let rendered = emit_object(obj, "Query", "Query", &schema, &config);
                assert_eq!(rendered.phantom, "type Query = RootQuery");
            }
        }
    }

    #[test]
    fn unmapped_scalar_emits_no_declaration() {
        let (doc, schema) = index("scalar Upload type Query { upload: Upload! }");
        let config = Configuration::default();
        for def in &doc.definitions {
            if let graphql_parser::schema::Definition::TypeDefinition(def @ graphql_parser::schema::TypeDefinition::Scalar(_)) = def {
                assert!(emit_type(def, "Upload", "Upload", &schema, &config).is_none());
            }
        }
    }
}
