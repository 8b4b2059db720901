use crate::schema::DEFAULT_MUTATION_TYPE_NAME;
use crate::schema::DEFAULT_QUERY_TYPE_NAME;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Parameter;
use std::fmt::Write;

pub(super) fn print_schema(schema: &Schema) -> String {
    let mut blocks = vec![];

    if let Some(schema_block) = print_schema_definition(schema) {
        blocks.push(schema_block);
    }

    for type_ in schema.all_types().values() {
        match type_ {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => (),

            GraphQLType::Scalar(scalar) => {
                let mut out = String::new();
                push_description(&mut out, scalar.get_description(), "");
                out.push_str("scalar ");
                out.push_str(scalar.name());
                blocks.push(out);
            },

            GraphQLType::Object(obj_type) => blocks.push(print_object_type(obj_type)),
        }
    }

    let mut sdl = blocks.join("\n\n");
    sdl.push('\n');
    sdl
}

/// Only needed when a root type does not use its default name.
fn print_schema_definition(schema: &Schema) -> Option<String> {
    let query_name = schema.query_type().name();
    let mutation_name = schema.mutation_type().map(|t| t.name());
    let is_default = query_name == DEFAULT_QUERY_TYPE_NAME
        && mutation_name.is_none_or(|name| name == DEFAULT_MUTATION_TYPE_NAME);
    if is_default {
        return None;
    }

    let mut out = String::from("schema {\n");
    let _ = writeln!(out, "  query: {query_name}");
    if let Some(mutation_name) = mutation_name {
        let _ = writeln!(out, "  mutation: {mutation_name}");
    }
    out.push('}');
    Some(out)
}

fn print_object_type(obj_type: &ObjectType) -> String {
    let mut out = String::new();
    push_description(&mut out, obj_type.get_description(), "");
    let _ = writeln!(out, "type {} {{", obj_type.name());
    for field in obj_type.fields().values() {
        if field.name().starts_with("__") {
            continue;
        }
        print_field(&mut out, field);
    }
    out.push('}');
    out
}

fn print_field(out: &mut String, field: &Field) {
    push_description(out, field.get_description(), "  ");
    out.push_str("  ");
    out.push_str(field.name());

    let params = field.parameters();
    if !params.is_empty() {
        let multiline = params.iter().any(|p| p.get_description().is_some());
        out.push('(');
        if multiline {
            out.push('\n');
            for param in params {
                push_description(out, param.get_description(), "    ");
                out.push_str("    ");
                out.push_str(&print_parameter(param));
                out.push('\n');
            }
            out.push_str("  ");
        } else {
            let printed: Vec<String> = params.iter().map(print_parameter).collect();
            out.push_str(&printed.join(", "));
        }
        out.push(')');
    }

    let _ = writeln!(out, ": {}", field.type_annotation());
}

fn print_parameter(param: &Parameter) -> String {
    match param.get_default_value() {
        Some(default) => format!("{}: {} = {default}", param.name(), param.type_annotation()),
        None => format!("{}: {}", param.name(), param.type_annotation()),
    }
}

fn push_description(out: &mut String, description: Option<&str>, indent: &str) {
    let Some(description) = description else {
        return;
    };
    let escaped = description.replace("\"\"\"", "\\\"\"\"");
    if !escaped.contains('\n') && !escaped.ends_with('"') {
        let _ = writeln!(out, "{indent}\"\"\"{escaped}\"\"\"");
        return;
    }

    let _ = writeln!(out, "{indent}\"\"\"");
    for line in escaped.lines() {
        let _ = writeln!(out, "{indent}{line}");
    }
    let _ = writeln!(out, "{indent}\"\"\"");
}
