//! Emits one field accessor: signature, argument list, implicit encoder
//! parameters, docstring, deprecation marker, body (spec.md §4.4).
//!
//! Grounded on `litho-codegen`'s per-field loops in `process_object` /
//! `process_interface` (docstring-then-signature shape, optional/list
//! suffixing), extended with arguments, encoders, deprecation, and the
//! three abstract-type emission shapes per spec.md §4.4–§4.5.

use graphql_parser::schema::{Directive, Field, InputValue, Value};

use crate::config::Configuration;
use crate::document_emitter::{NamedKind, SchemaIndex};
use crate::name_mangler::{mangle_accessor_name, mangle_accessor_name_before_colon};
use crate::scalar_resolver;
use crate::type_printer;

/// Renders `field`'s docstring + deprecation marker + signature + body as a
/// ready-to-indent block (no leading/trailing blank lines).
pub fn emit_field(
    field: &Field<'static, String>,
    owner_expr: &str,
    schema: &SchemaIndex,
    config: &Configuration,
) -> String {
    let mut out = String::new();
    if let Some(doc) = render_docstring(field.description.as_deref()) {
        out.push_str(&doc);
        out.push('\n');
    }
    if let Some(dep) = render_deprecation(&field.directives) {
        out.push_str(&dep);
        out.push('\n');
    }

    let accessor = mangle_accessor_name(&field.name);
    let (params, encoders, arg_exprs) = render_arguments(&field.arguments, config);

    let inner_name = type_printer::named_type(&field.field_type);
    match schema.kind_of(inner_name) {
        Some(NamedKind::Object) | Some(NamedKind::Scalar) | Some(NamedKind::Enum) | None => {
            out.push_str(&emit_scalar_or_object_field(
                &accessor, owner_expr, field, inner_name, schema, config, &params, &encoders, &arg_exprs,
            ));
        }
        Some(NamedKind::Union) => {
            out.push_str(&emit_union_field(&accessor, owner_expr, field, inner_name, schema, &params, &encoders, &arg_exprs));
        }
        Some(NamedKind::Interface) => {
            out.push_str(&emit_interface_field(&accessor, owner_expr, field, inner_name, schema, &params, &encoders, &arg_exprs));
        }
    }

    out
}

fn render_docstring(description: Option<&str>) -> Option<String> {
    description.map(|d| format!("/** {d} */"))
}

fn render_deprecation(directives: &[Directive<'static, String>]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find(|(name, _)| name == "reason")
        .and_then(|(_, value)| match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let literal = if reason.contains('\n') {
        format!("\"\"\"{reason}\"\"\"")
    } else {
        format!("\"{reason}\"")
    };
    Some(format!("@deprecated({literal}, \"\")"))
}

/// Returns (parameter declarations, implicit encoder declarations, argument
/// constructor expressions), all in source-declared order.
fn render_arguments(
    arguments: &[InputValue<'static, String>],
    config: &Configuration,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut params = Vec::with_capacity(arguments.len());
    let mut encoders = Vec::with_capacity(arguments.len());
    let mut arg_exprs = Vec::with_capacity(arguments.len());

    for (index, arg) in arguments.iter().enumerate() {
        let arg_type = scalar_resolver::resolve(type_printer::named_type(&arg.value_type), config);
        let (target, _) = type_printer::lower(&arg.value_type, &arg_type, "Scalar()");
        let ident = mangle_accessor_name_before_colon(&arg.name);
        let param = match type_printer::argument_default(&arg.value_type) {
            Some(default) => format!("{ident}: {target} = {default}"),
            None => format!("{ident}: {target}"),
        };
        params.push(param);

        let encoder_name = format!("encoder{index}");
        encoders.push(format!("{encoder_name}: ArgEncoder[{target}]"));

        let literal = type_printer::to_sdl(&arg.value_type);
        let value_ident = mangle_accessor_name(&arg.name);
        arg_exprs.push(format!(
            "Argument(\"{}\", {value_ident}, \"{literal}\")({encoder_name})",
            arg.name
        ));
    }

    (params, encoders, arg_exprs)
}

fn render_args_clause(arg_exprs: &[String]) -> String {
    if arg_exprs.is_empty() {
        String::new()
    } else {
        format!(", arguments = List({})", arg_exprs.join(", "))
    }
}

fn signature_head(accessor: &str, generics: &str, params: &[String], encoders: &[String]) -> String {
    let params_clause = if params.is_empty() { String::new() } else { format!("({})", params.join(", ")) };
    let implicit_clause = if encoders.is_empty() {
        String::new()
    } else {
        format!("(implicit {})", encoders.join(", "))
    };
    format!("def {accessor}{generics}{params_clause}{implicit_clause}")
}

#[allow(clippy::too_many_arguments)]
fn emit_scalar_or_object_field(
    accessor: &str,
    owner_expr: &str,
    field: &Field<'static, String>,
    inner_name: &str,
    schema: &SchemaIndex,
    config: &Configuration,
    params: &[String],
    encoders: &[String],
    arg_exprs: &[String],
) -> String {
    if schema.objects.contains_key(inner_name) {
        let inner_mangled = schema.mangled(inner_name);
        let (target, builder) = type_printer::lower(&field.field_type, "A", "Obj(innerSelection)");
        let mut sig_params = params.to_vec();
        sig_params.push(format!("innerSelection: SelectionBuilder[{inner_mangled}, A]"));
        let head = signature_head(accessor, "[A]", &sig_params, encoders);
        format!(
            "{head}: SelectionBuilder[{owner_expr}, {target}] =\n  Field(\"{}\", {builder}{})",
            field.name,
            render_args_clause(arg_exprs)
        )
    } else {
        let leaf_target = scalar_resolver::resolve(inner_name, config);
        let (target, builder) = type_printer::lower(&field.field_type, &leaf_target, "Scalar()");
        let head = signature_head(accessor, "", params, encoders);
        format!(
            "{head}: SelectionBuilder[{owner_expr}, {target}] = Field(\"{}\", {builder}{})",
            field.name,
            render_args_clause(arg_exprs)
        )
    }
}

fn choice_of(variants: &[String]) -> String {
    let entries = variants
        .iter()
        .map(|v| format!("\"{v}\" -> Obj({})", variant_param_name(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("ChoiceOf(Map({entries}))")
}

fn choice_of_optional(variants: &[String]) -> String {
    let entries = variants
        .iter()
        .map(|v| {
            let p = variant_param_name(v);
            format!("\"{v}\" -> {p}.fold[FieldBuilder[A]](NullField)(Obj(_))")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("ChoiceOf(Map({entries}))")
}

fn variant_param_name(variant: &str) -> String {
    format!("on{variant}")
}

fn emit_union_field(
    accessor: &str,
    owner_expr: &str,
    field: &Field<'static, String>,
    union_name: &str,
    schema: &SchemaIndex,
    params: &[String],
    encoders: &[String],
    arg_exprs: &[String],
) -> String {
    let variants = schema.unions.get(union_name).map(|u| u.clone()).unwrap_or_default();
    emit_abstract_field(accessor, owner_expr, field, &variants, schema, params, encoders, arg_exprs, None)
}

fn emit_interface_field(
    accessor: &str,
    owner_expr: &str,
    field: &Field<'static, String>,
    interface_name: &str,
    schema: &SchemaIndex,
    params: &[String],
    encoders: &[String],
    arg_exprs: &[String],
) -> String {
    let implementors = schema.implementors.get(interface_name).cloned().unwrap_or_default();
    emit_abstract_field(
        accessor,
        owner_expr,
        field,
        &implementors,
        schema,
        params,
        encoders,
        arg_exprs,
        Some(interface_name),
    )
}

/// Shared shape for union and interface fields. `common_type` is `Some` for
/// interfaces (enabling the `<field>Interface` accessor) and `None` for
/// unions (which have none). An empty `variants` list — an interface with
/// zero implementors — emits only the common-fields accessor, per spec.md
/// §9's open-question resolution. `variants` are raw GraphQL type names:
/// they stay unmangled in `ChoiceOf` map keys (the wire-visible discriminant)
/// but are resolved through `schema.mangled` wherever they appear as a
/// `SelectionBuilder[...]` type reference.
#[allow(clippy::too_many_arguments)]
fn emit_abstract_field(
    accessor: &str,
    owner_expr: &str,
    field: &Field<'static, String>,
    variants: &[String],
    schema: &SchemaIndex,
    params: &[String],
    encoders: &[String],
    arg_exprs: &[String],
    common_type: Option<&str>,
) -> String {
    let args_clause = render_args_clause(arg_exprs);
    let mut blocks = Vec::new();

    if !variants.is_empty() {
        let (target, _) = type_printer::lower(&field.field_type, "A", "");
        let mut exhaustive_params = params.to_vec();
        for v in variants {
            exhaustive_params.push(format!("{}: SelectionBuilder[{}, A]", variant_param_name(v), schema.mangled(v)));
        }
        let builder = type_printer::lower(&field.field_type, "A", &choice_of(variants)).1;
        let head = signature_head(accessor, "[A]", &exhaustive_params, encoders);
        blocks.push(format!(
            "{head}: SelectionBuilder[{owner_expr}, {target}] =\n  Field(\"{}\", {builder}{args_clause})",
            field.name
        ));

        let mut optional_params = params.to_vec();
        for v in variants {
            optional_params.push(format!(
                "{}: Option[SelectionBuilder[{}, A]] = None",
                variant_param_name(v),
                schema.mangled(v)
            ));
        }
        let optional_builder = type_printer::lower(&field.field_type, "A", &choice_of_optional(variants)).1;
        let optional_head = signature_head(&format!("{accessor}Option"), "[A]", &optional_params, encoders);
        blocks.push(format!(
            "{optional_head}: SelectionBuilder[{owner_expr}, {target}] =\n  Field(\"{}\", {optional_builder}{args_clause})",
            field.name
        ));
    }

    if let Some(interface_name) = common_type {
        let interface_mangled = schema.mangled(interface_name);
        let (target, builder) = type_printer::lower(&field.field_type, "A", "Obj(interfaceSelection)");
        let mut common_params = params.to_vec();
        common_params.push(format!("interfaceSelection: SelectionBuilder[{interface_mangled}, A]"));
        let head = signature_head(&format!("{accessor}Interface"), "[A]", &common_params, encoders);
        blocks.push(format!(
            "{head}: SelectionBuilder[{owner_expr}, {target}] =\n  Field(\"{}\", {builder}{args_clause})",
            field.name
        ));
    }

    blocks.join("\n\n")
}
