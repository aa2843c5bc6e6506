//! Orchestration: schema indexing, root-alias resolution, import assembly,
//! ordering, and single-file/split-file assembly (spec.md §4.6).
//!
//! Grounded on `litho-codegen`'s `Generator::generate` (`src/typescript/
//! generator.rs`): preprocess directives, collect+sort type definitions,
//! dispatch each to a per-kind emitter. The sort there (`tys.sort_by_key`)
//! is kept for split-file *file* ordering (spec.md §8 scenario 7 lists
//! `Character` before `Q`, alphabetically, even though `Q` is declared
//! first in source); single-file ordering instead follows spec.md §4.6's
//! explicit source-order-plus-root-aliasing rule. See DESIGN.md.

use std::collections::BTreeMap;

use graphql_parser::schema::{Definition, Document, TypeDefinition};

use crate::config::Configuration;
use crate::name_mangler;
use crate::type_emitter;

pub const ROOT_QUERY: &str = "RootQuery";
pub const ROOT_MUTATION: &str = "RootMutation";
pub const ROOT_SUBSCRIPTION: &str = "RootSubscription";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKind {
    Scalar,
    Enum,
    Object,
    Interface,
    Union,
}

/// A flattened, queryable index over a parsed schema document. Built once
/// per `write` call and threaded by reference into every emitter.
#[derive(Debug, Default)]
pub struct SchemaIndex {
    pub objects: BTreeMap<String, graphql_parser::schema::ObjectType<'static, String>>,
    pub interfaces: BTreeMap<String, graphql_parser::schema::InterfaceType<'static, String>>,
    pub unions: BTreeMap<String, Vec<String>>,
    pub enums: BTreeMap<String, graphql_parser::schema::EnumType<'static, String>>,
    pub inputs: BTreeMap<String, graphql_parser::schema::InputObjectType<'static, String>>,
    pub scalars: BTreeMap<String, graphql_parser::schema::ScalarType<'static, String>>,
    /// interface name -> implementing object type names, source order.
    pub implementors: BTreeMap<String, Vec<String>>,
    /// type name -> root sentinel ("RootQuery" | "RootMutation" | "RootSubscription").
    pub root_aliases: BTreeMap<String, &'static str>,
    /// source order of all top-level type definitions (as declared).
    pub source_order: Vec<String>,
    /// raw GraphQL type name -> its declaration identifier after sibling-
    /// collision suffixing (spec.md §4.2 rule 3).
    pub mangled_names: BTreeMap<String, String>,
}

impl SchemaIndex {
    pub fn build(document: &Document<'static, String>) -> SchemaIndex {
        let mut index = SchemaIndex::default();

        for definition in &document.definitions {
            if let Definition::TypeDefinition(type_def) = definition {
                index.source_order.push(type_name(type_def).to_string());
            }
        }

        for definition in &document.definitions {
            match definition {
                Definition::TypeDefinition(TypeDefinition::Object(obj)) => {
                    index.objects.insert(obj.name.clone(), obj.clone());
                }
                Definition::TypeDefinition(TypeDefinition::Interface(iface)) => {
                    index.interfaces.insert(iface.name.clone(), iface.clone());
                }
                Definition::TypeDefinition(TypeDefinition::Union(u)) => {
                    index.unions.insert(u.name.clone(), u.types.clone());
                }
                Definition::TypeDefinition(TypeDefinition::Enum(e)) => {
                    index.enums.insert(e.name.clone(), e.clone());
                }
                Definition::TypeDefinition(TypeDefinition::InputObject(input)) => {
                    index.inputs.insert(input.name.clone(), input.clone());
                }
                Definition::TypeDefinition(TypeDefinition::Scalar(scalar)) => {
                    index.scalars.insert(scalar.name.clone(), scalar.clone());
                }
                Definition::SchemaDefinition(schema_def) => {
                    if let Some(q) = &schema_def.query {
                        index.root_aliases.insert(q.clone(), ROOT_QUERY);
                    }
                    if let Some(m) = &schema_def.mutation {
                        index.root_aliases.insert(m.clone(), ROOT_MUTATION);
                    }
                    if let Some(s) = &schema_def.subscription {
                        index.root_aliases.insert(s.clone(), ROOT_SUBSCRIPTION);
                    }
                }
                _ => {}
            }
        }

        // An implicit `type Query { ... }` is the query root when the
        // document has no explicit `schema { ... }` block.
        if index.root_aliases.is_empty() && index.objects.contains_key("Query") {
            index.root_aliases.insert("Query".to_string(), ROOT_QUERY);
        }
        if !index.root_aliases.values().any(|v| *v == ROOT_MUTATION) && index.objects.contains_key("Mutation") {
            index.root_aliases.insert("Mutation".to_string(), ROOT_MUTATION);
        }
        if !index.root_aliases.values().any(|v| *v == ROOT_SUBSCRIPTION)
            && index.objects.contains_key("Subscription")
        {
            index.root_aliases.insert("Subscription".to_string(), ROOT_SUBSCRIPTION);
        }

        for (object_name, object) in &index.objects {
            for interface_name in &object.implements_interfaces {
                index
                    .implementors
                    .entry(interface_name.clone())
                    .or_default()
                    .push(object_name.clone());
            }
        }
        // Preserve source order within each interface's implementor list.
        for implementors in index.implementors.values_mut() {
            implementors.sort_by_key(|name| index.source_order.iter().position(|n| n == name).unwrap_or(usize::MAX));
        }

        let mangled = name_mangler::dedupe_siblings(index.source_order.iter().map(String::as_str));
        index.mangled_names = index.source_order.iter().cloned().zip(mangled).collect();

        index
    }

    /// `raw_name`'s declaration identifier, after sibling-collision
    /// suffixing. Falls back to `raw_name` itself for names with no
    /// top-level declaration (built-in scalars).
    pub fn mangled(&self, raw_name: &str) -> &str {
        self.mangled_names.get(raw_name).map(String::as_str).unwrap_or(raw_name)
    }

    pub fn kind_of(&self, name: &str) -> Option<NamedKind> {
        if self.objects.contains_key(name) {
            Some(NamedKind::Object)
        } else if self.interfaces.contains_key(name) {
            Some(NamedKind::Interface)
        } else if self.unions.contains_key(name) {
            Some(NamedKind::Union)
        } else if self.enums.contains_key(name) {
            Some(NamedKind::Enum)
        } else if self.inputs.contains_key(name) || self.scalars.contains_key(name) {
            Some(NamedKind::Scalar)
        } else {
            None
        }
    }

    /// The `SelectionBuilder[Owner, ...]` expression for a type: its root
    /// sentinel if `raw_name` is a schema root, `mangled_name` (the type's
    /// own already sibling-deduped declaration name) otherwise.
    pub fn owner_expr(&self, raw_name: &str, mangled_name: &str) -> String {
        self.root_aliases
            .get(raw_name)
            .map(|s| s.to_string())
            .unwrap_or_else(|| mangled_name.to_string())
    }
}

fn type_name<'a>(type_def: &'a TypeDefinition<'static, String>) -> &'a str {
    match type_def {
        TypeDefinition::Scalar(t) => &t.name,
        TypeDefinition::Object(t) => &t.name,
        TypeDefinition::Interface(t) => &t.name,
        TypeDefinition::Union(t) => &t.name,
        TypeDefinition::Enum(t) => &t.name,
        TypeDefinition::InputObject(t) => &t.name,
    }
}

const FIELD_BUILDER_IMPORT: &str = "import caliban.client.FieldBuilder._";
const VALUE_IMPORTS: [&str; 2] = [
    "import caliban.client.Value._",
    "import caliban.client.CalibanClientError.DecodingError",
];
const BASE_IMPORT: &str = "import caliban.client._";

struct EmittedType {
    name: String,
    phantom: String,
    body: Option<String>,
    has_field_builder: bool,
    has_value: bool,
}

/// Runs the whole pipeline over `document` and returns the generated files,
/// per spec.md §6: one `("Client", text)` entry when `config.split_files`
/// is false, or `("package", ...)` followed by one entry per declaration
/// (alphabetical by name) when it is true.
pub fn emit(document: &Document<'static, String>, config: &Configuration) -> Vec<(String, String)> {
    let schema = SchemaIndex::build(document);

    let mut emitted = Vec::new();
    for definition in document.definitions.iter().filter_map(|d| {
        if let Definition::TypeDefinition(t) = d {
            Some(t)
        } else {
            None
        }
    }) {
        let raw_name = type_name(definition);
        let mangled_name = schema.mangled(raw_name);
        let is_mappable_kind = matches!(definition, TypeDefinition::Scalar(_) | TypeDefinition::Enum(_));
        if is_mappable_kind && config.scalar_mappings.contains_key(raw_name) {
            continue;
        }

        if let Some(rendered) = type_emitter::emit_type(definition, raw_name, mangled_name, &schema, config) {
            emitted.push(EmittedType {
                name: mangled_name.to_string(),
                phantom: rendered.phantom,
                body: rendered.body,
                has_field_builder: rendered.has_field_builder,
                has_value: rendered.has_value,
            });
        }
    }

    let has_field_builder = emitted.iter().any(|e| e.has_field_builder);
    let has_value = emitted.iter().any(|e| e.has_value);

    if config.split_files {
        emit_split(emitted, config, has_field_builder, has_value)
    } else {
        vec![("Client".to_string(), emit_single(emitted, config, has_field_builder, has_value))]
    }
}

fn emit_single(emitted: Vec<EmittedType>, config: &Configuration, has_field_builder: bool, has_value: bool) -> String {
    let mut out = String::new();
    for line in imports(has_field_builder, has_value, &config.additional_imports) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("object Client {\n");
    let mut sections = Vec::new();
    for item in &emitted {
        let mut section = item.phantom.clone();
        if let Some(body) = &item.body {
            if !section.is_empty() {
                section.push_str("\n\n");
            }
            section.push_str(body);
        }
        sections.push(crate::text::indent(&section, 2));
    }
    out.push_str(&sections.join("\n\n"));
    out.push_str("\n}\n");
    out
}

fn emit_split(
    emitted: Vec<EmittedType>,
    config: &Configuration,
    has_field_builder: bool,
    has_value: bool,
) -> Vec<(String, String)> {
    let package = config.package_name.as_deref().unwrap_or("client");

    let phantoms = emitted
        .iter()
        .filter(|e| !e.phantom.is_empty())
        .map(|e| crate::text::indent(&e.phantom, 2))
        .collect::<Vec<_>>()
        .join("\n");

    let mut package_file = String::new();
    if !phantoms.is_empty() {
        // Phantom lines can alias a schema root (`type Q = RootQuery`), which
        // lives in `caliban.client` — without this import the package file
        // itself fails to compile.
        package_file.push_str(BASE_IMPORT);
        package_file.push_str("\n\n");
    }
    package_file.push_str(&format!("package object {package} {{\n"));
    package_file.push_str(&phantoms);
    package_file.push_str("\n}\n");

    let mut files = vec![("package".to_string(), package_file)];

    let mut per_type: Vec<&EmittedType> = emitted.iter().filter(|e| e.body.is_some()).collect();
    per_type.sort_by(|a, b| a.name.cmp(&b.name));

    for item in per_type {
        let mut file = format!("package {package}\n\n");
        for line in imports(has_field_builder, has_value, &config.additional_imports) {
            file.push_str(&line);
            file.push('\n');
        }
        file.push('\n');
        file.push_str(item.body.as_deref().unwrap_or_default());
        file.push('\n');
        files.push((item.name.clone(), file));
    }

    files
}

fn imports(has_field_builder: bool, has_value: bool, additional: &[String]) -> Vec<String> {
    let mut lines = vec![BASE_IMPORT.to_string()];
    if has_field_builder {
        lines.push(FIELD_BUILDER_IMPORT.to_string());
    }
    if has_value {
        lines.extend(VALUE_IMPORTS.iter().map(|s| s.to_string()));
    }
    if !additional.is_empty() {
        lines.push(String::new());
        lines.extend(additional.iter().cloned());
    }
    lines
}
