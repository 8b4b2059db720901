use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::error::ResponsePath;
use crate::execution::InputCoercer;
use crate::execution::VariableBindings;
use crate::execution::executor::selection_shape_error;
use crate::execution::executor::unknown_field_error;
use crate::parser::ast;
use crate::schema::Schema;
use crate::types::ObjectType;
use std::collections::HashSet;

/// Checks documents against a schema without running resolvers.
///
/// Reports the same binding and argument problems the executor would, for
/// every operation in the document at once. Variable values are unknown, so
/// variable references are only checked for being declared.
pub(crate) struct DocumentValidator<'schema> {
    coercer: InputCoercer<'schema>,
    schema: &'schema Schema,
}
impl<'schema> DocumentValidator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            coercer: InputCoercer::new(schema.all_types()),
            schema,
        }
    }

    pub fn validate(&self, document: &ast::Document) -> Vec<GraphQLError> {
        let mut errors = vec![];
        for op in &document.operations {
            self.validate_operation(op, &mut errors);
        }
        log::debug!(
            "validated {} operation(s): {} error(s)",
            document.operations.len(),
            errors.len(),
        );
        errors
    }

    fn validate_operation(&self, op: &ast::OperationDefinition, errors: &mut Vec<GraphQLError>) {
        for var_def in &op.variable_definitions {
            let type_name = var_def.type_annotation.innermost_name();
            let problem = match self.schema.type_named(type_name) {
                None => Some(format!("the unknown type `{type_name}`")),
                Some(type_) if !type_.is_input_type() => Some(format!(
                    "the object type `{type_name}`, which cannot be used as input"
                )),
                Some(_) => None,
            };
            if let Some(problem) = problem {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::ArgumentCoercion,
                        format!("variable `${}` is declared with {problem}", var_def.name.as_str()),
                    )
                    .at(var_def.type_annotation.span()),
                );
            }
        }

        let Some(root_type) = self.schema.root_type(op.kind) else {
            errors.push(
                GraphQLError::new(
                    ErrorKind::OperationResolution,
                    format!("the schema does not support {} operations", op.kind),
                )
                .at(&op.span),
            );
            return;
        };

        let bindings = VariableBindings::unchecked(op);
        let mut path = ResponsePath::new();
        self.validate_selection_set(root_type, &op.selection_set, &bindings, &mut path, errors);
    }

    fn validate_selection_set(
        &self,
        obj_type: &ObjectType,
        selection_set: &ast::SelectionSet,
        bindings: &VariableBindings<'_>,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) {
        let mut response_keys = HashSet::new();
        for field in &selection_set.fields {
            let response_key = field.response_key();
            path.push(PathSegment::Key(response_key.to_string()));

            if !response_keys.insert(response_key) {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::SchemaBinding,
                        format!(
                            "response key \"{response_key}\" is selected more than once on \
                            type \"{}\"",
                            obj_type.name(),
                        ),
                    )
                    .at(&field.span)
                    .with_path(path.clone()),
                );
            } else {
                self.validate_field(obj_type, field, bindings, path, errors);
            }

            path.pop();
        }
    }

    fn validate_field(
        &self,
        obj_type: &ObjectType,
        field: &ast::Field,
        bindings: &VariableBindings<'_>,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) {
        let Some(field_def) = obj_type.field(field.name.as_str()) else {
            errors.push(unknown_field_error(obj_type, field).with_path(path.clone()));
            return;
        };
        let Some(field_type) = self.schema.type_named(field_def.type_annotation().innermost_name())
        else {
            return;
        };

        let coordinate = format!("{}.{}", obj_type.name(), field_def.name());
        if let Some(err) = selection_shape_error(&coordinate, field_def, field_type, field) {
            errors.push(err.with_path(path.clone()));
            return;
        }

        if let Err(arg_errors) =
            self.coercer.coerce_arguments(obj_type.name(), field_def, field, bindings)
        {
            errors.extend(arg_errors.into_iter().map(|err| err.with_path(path.clone())));
        }

        if let (Some(child_type), Some(selection_set)) =
            (field_type.as_object(), &field.selection_set)
        {
            self.validate_selection_set(child_type, selection_set, bindings, path, errors);
        }
    }
}
