use crate::error::ErrorKind;
use crate::error::FieldError;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::error::ResponsePath;
use crate::error::format_path;
use crate::execution::Arguments;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResult;
use crate::execution::InputCoercer;
use crate::execution::ResolveContext;
use crate::execution::VariableBindings;
use crate::parser;
use crate::parser::ast;
use crate::parser::ast::OperationKind;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::value::FieldValue;
use crate::value::GraphQLObject;
use crate::value::OutputObject;
use crate::value::OutputValue;
use crate::value::Variables;
use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;

/// Walks one operation against a [`Schema`].
///
/// Fields run one after another in document order. Every failure below the
/// operation level is local to the field it happens in: the field's slot
/// becomes `null`, an error is recorded with the field's path, and siblings
/// carry on.
pub(crate) struct Executor<'schema> {
    coercer: InputCoercer<'schema>,
    schema: &'schema Schema,
}

/// The selection currently being completed, for error reporting.
struct FieldSite<'a> {
    bindings: &'a VariableBindings<'a>,
    coordinate: String,
    field: &'a ast::Field,
}

impl<'schema> Executor<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            coercer: InputCoercer::new(schema.all_types()),
            schema,
        }
    }

    pub fn execute_request(&self, request: &ExecutionRequest) -> ExecutionResult {
        log::debug!(
            "executing request (operation name: {:?}, kind: {:?}, {} variable(s))",
            request.operation_name,
            request.operation_kind,
            request.variables.len(),
        );

        let parse_result = parser::parse_executable(&request.query);
        if let Some(parse_error) = parse_result.errors.first() {
            log::debug!(
                "request aborted with {} syntax error(s); first: {}",
                parse_result.errors.len(),
                parse_error.format_oneline(),
            );
            return ExecutionResult::aborted(parse_error.into());
        }
        let Some(document) = parse_result.into_valid_ast() else {
            return ExecutionResult::aborted(GraphQLError::new(
                ErrorKind::Syntax,
                "the query document could not be parsed",
            ));
        };

        self.execute_document(
            &document,
            request.operation_name.as_deref(),
            request.operation_kind,
            &request.variables,
        )
    }

    pub fn execute_document(
        &self,
        document: &ast::Document,
        operation_name: Option<&str>,
        operation_kind: Option<OperationKind>,
        variables: &Variables,
    ) -> ExecutionResult {
        let op = match select_operation(document, operation_name, operation_kind) {
            Ok(op) => op,
            Err(err) => {
                log::debug!("request aborted: {}", err.message());
                return ExecutionResult::aborted(err);
            },
        };

        let Some(root_type) = self.schema.root_type(op.kind) else {
            log::debug!("request aborted: no root type for {} operations", op.kind);
            return ExecutionResult::aborted(
                GraphQLError::new(
                    ErrorKind::OperationResolution,
                    format!("the schema does not support {} operations", op.kind),
                )
                .at(&op.span),
            );
        };

        let bindings = VariableBindings::for_operation(op, variables);
        let mut errors = vec![];
        let mut path = ResponsePath::new();
        let data = self.execute_selection_set(
            root_type,
            None,
            &op.selection_set,
            &bindings,
            &mut path,
            &mut errors,
        );

        log::debug!(
            "{} operation {} finished with {} error(s)",
            op.kind,
            op.name_str().unwrap_or("<anonymous>"),
            errors.len(),
        );
        ExecutionResult {
            data: Some(data),
            errors,
        }
    }

    fn execute_selection_set(
        &self,
        obj_type: &ObjectType,
        parent: Option<&dyn GraphQLObject>,
        selection_set: &ast::SelectionSet,
        bindings: &VariableBindings<'_>,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) -> OutputObject {
        let mut data = OutputObject::with_capacity(selection_set.fields.len());
        for field in &selection_set.fields {
            let response_key = field.response_key();
            path.push(PathSegment::Key(response_key.to_string()));

            if data.contains_key(response_key) {
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
                let value = self.execute_field(obj_type, parent, field, bindings, path, errors);
                data.insert(response_key.to_string(), value);
            }

            path.pop();
        }
        data
    }

    fn execute_field(
        &self,
        obj_type: &ObjectType,
        parent: Option<&dyn GraphQLObject>,
        field: &ast::Field,
        bindings: &VariableBindings<'_>,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) -> OutputValue {
        log::trace!("resolving `{}.{}` at {}", obj_type.name(), field.name.as_str(), format_path(path));

        let Some(field_def) = obj_type.field(field.name.as_str()) else {
            errors.push(
                unknown_field_error(obj_type, field).with_path(path.clone()),
            );
            return OutputValue::Null;
        };

        let coordinate = format!("{}.{}", obj_type.name(), field_def.name());
        let Some(field_type) = self.schema.type_named(field_def.type_annotation().innermost_name())
        else {
            log::error!("`{coordinate}` refers to a type missing from the schema");
            errors.push(internal_error(&coordinate).at(&field.span).with_path(path.clone()));
            return OutputValue::Null;
        };

        if let Some(err) = selection_shape_error(&coordinate, field_def, field_type, field) {
            errors.push(err.with_path(path.clone()));
            return OutputValue::Null;
        }

        let arguments =
            match self.coercer.coerce_arguments(obj_type.name(), field_def, field, bindings) {
                Ok(arguments) => arguments,
                Err(arg_errors) => {
                    errors.extend(arg_errors.into_iter().map(|err| err.with_path(path.clone())));
                    return OutputValue::Null;
                },
            };

        let resolved = match resolve_field(&coordinate, obj_type, field_def, parent, &arguments, path) {
            Ok(value) => value,
            Err(err) => {
                errors.push(err.at(&field.span).with_path(path.clone()));
                return OutputValue::Null;
            },
        };

        let site = FieldSite {
            bindings,
            coordinate,
            field,
        };
        self.complete_value(&site, field_def.type_annotation(), resolved, path, errors)
    }

    fn complete_value(
        &self,
        site: &FieldSite<'_>,
        type_annot: &TypeAnnotation,
        value: FieldValue,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) -> OutputValue {
        match type_annot {
            TypeAnnotation::NonNull(inner) => {
                let errors_before = errors.len();
                let completed = self.complete_value(site, inner, value, path, errors);
                if completed.is_null() && errors.len() == errors_before {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Resolver,
                            format!(
                                "field \"{}\" is declared as `{type_annot}` but resolved to null",
                                site.coordinate,
                            ),
                        )
                        .at(&site.field.span)
                        .with_path(path.clone()),
                    );
                }
                completed
            },

            TypeAnnotation::List(inner) => match value {
                FieldValue::Null => OutputValue::Null,
                FieldValue::List(items) => {
                    let mut completed = Vec::with_capacity(items.len());
                    for (index, item) in items.into_iter().enumerate() {
                        path.push(PathSegment::Index(index));
                        completed.push(self.complete_value(site, inner, item, path, errors));
                        path.pop();
                    }
                    OutputValue::List(completed)
                },
                other => {
                    log::error!(
                        "`{}` is declared as `{type_annot}` but its resolver returned {other:?}",
                        site.coordinate,
                    );
                    errors.push(site.internal_error(path));
                    OutputValue::Null
                },
            },

            TypeAnnotation::Named(type_name) => {
                if value.is_null() {
                    return OutputValue::Null;
                }
                match self.schema.type_named(type_name) {
                    Some(GraphQLType::Object(obj_type)) => {
                        self.complete_object(site, obj_type, value, path, errors)
                    },

                    Some(leaf_type) => match leaf_type.serialize_leaf(&value) {
                        Ok(output) => output,
                        Err(err) => {
                            log::error!("cannot serialize `{}`: {err}", site.coordinate);
                            errors.push(site.internal_error(path));
                            OutputValue::Null
                        },
                    },

                    None => {
                        log::error!("`{}` refers to the undefined type `{type_name}`", site.coordinate);
                        errors.push(site.internal_error(path));
                        OutputValue::Null
                    },
                }
            },
        }
    }

    fn complete_object(
        &self,
        site: &FieldSite<'_>,
        obj_type: &ObjectType,
        value: FieldValue,
        path: &mut ResponsePath,
        errors: &mut Vec<GraphQLError>,
    ) -> OutputValue {
        let object = match value {
            FieldValue::Object(object) => object,
            other => {
                log::error!(
                    "`{}` expects a `{}` object but its resolver returned {other:?}",
                    site.coordinate,
                    obj_type.name(),
                );
                errors.push(site.internal_error(path));
                return OutputValue::Null;
            },
        };

        if object.type_name() != obj_type.name() {
            log::error!(
                "`{}` expects a `{}` object but its resolver returned a `{}`",
                site.coordinate,
                obj_type.name(),
                object.type_name(),
            );
            errors.push(site.internal_error(path));
            return OutputValue::Null;
        }

        // The shape check before resolving guarantees a selection set here.
        let Some(selection_set) = &site.field.selection_set else {
            return OutputValue::Null;
        };
        OutputValue::Object(self.execute_selection_set(
            obj_type,
            Some(object.as_ref()),
            selection_set,
            site.bindings,
            path,
            errors,
        ))
    }
}

impl FieldSite<'_> {
    fn internal_error(&self, path: &ResponsePath) -> GraphQLError {
        internal_error(&self.coordinate)
            .at(&self.field.span)
            .with_path(path.clone())
    }
}

/// Picks the operation to run: the one named, otherwise the only one (of the
/// requested kind, if a kind is given).
fn select_operation<'doc>(
    document: &'doc ast::Document,
    operation_name: Option<&str>,
    operation_kind: Option<OperationKind>,
) -> Result<&'doc ast::OperationDefinition, GraphQLError> {
    let resolution_error = |message: String| {
        GraphQLError::new(ErrorKind::OperationResolution, message)
    };

    let op = match operation_name {
        Some(name) => document
            .operation_named(name)
            .ok_or_else(|| resolution_error(format!("unknown operation named \"{name}\"")))?,

        None => {
            let candidates: Vec<_> = document
                .operations
                .iter()
                .filter(|op| operation_kind.is_none_or(|kind| op.kind == kind))
                .collect();
            match candidates.as_slice() {
                [op] => *op,
                [] => {
                    return Err(resolution_error(match operation_kind {
                        Some(kind) => format!("the document contains no {kind} operation"),
                        None => "the document contains no operations".to_string(),
                    }));
                },
                _ => {
                    return Err(resolution_error(
                        "the document contains several operations; an operation name is \
                        required to choose one"
                            .to_string(),
                    ));
                },
            }
        },
    };

    if let Some(kind) = operation_kind
        && op.kind != kind
    {
        return Err(resolution_error(format!(
            "operation \"{}\" is a {}, but a {kind} was requested",
            op.name_str().unwrap_or("<anonymous>"),
            op.kind,
        ))
        .at(&op.span));
    }

    Ok(op)
}

/// Runs the field's resolver (or reads the property from the parent) with
/// panics contained.
fn resolve_field(
    coordinate: &str,
    obj_type: &ObjectType,
    field_def: &Field,
    parent: Option<&dyn GraphQLObject>,
    arguments: &Arguments,
    path: &ResponsePath,
) -> Result<FieldValue, GraphQLError> {
    let ctx = ResolveContext {
        arguments,
        field_name: field_def.name(),
        parent,
        parent_type_name: obj_type.name(),
        path,
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match field_def.get_resolver() {
        Some(resolver) => resolver(&ctx),
        None => resolve_from_parent(&ctx),
    }));

    match outcome {
        Ok(Ok(value)) => Ok(value),

        Ok(Err(FieldError::Resolver(message))) => {
            log::warn!("resolver for `{coordinate}` failed: {message}");
            Err(GraphQLError::new(ErrorKind::Resolver, message))
        },

        Ok(Err(FieldError::Internal(details))) => {
            log::error!("internal error while resolving `{coordinate}`: {details}");
            Err(internal_error(coordinate))
        },

        Err(payload) => {
            log::error!(
                "resolver for `{coordinate}` panicked: {}",
                panic_message(payload.as_ref()),
            );
            Err(internal_error(coordinate))
        },
    }
}

fn resolve_from_parent(ctx: &ResolveContext<'_>) -> Result<FieldValue, FieldError> {
    let Some(parent) = ctx.parent() else {
        return Err(FieldError::internal(format!(
            "root field `{}.{}` has no resolver",
            ctx.parent_type_name(),
            ctx.field_name(),
        )));
    };
    parent.field_value(ctx.field_name()).ok_or_else(|| {
        FieldError::internal(format!(
            "`{}` objects have no `{}` property",
            parent.type_name(),
            ctx.field_name(),
        ))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

fn internal_error(coordinate: &str) -> GraphQLError {
    GraphQLError::new(
        ErrorKind::Internal,
        format!("internal error while resolving field \"{coordinate}\""),
    )
}

pub(crate) fn unknown_field_error(obj_type: &ObjectType, field: &ast::Field) -> GraphQLError {
    GraphQLError::new(
        ErrorKind::SchemaBinding,
        format!(
            "Cannot query field \"{}\" on type \"{}\"",
            field.name.as_str(),
            obj_type.name(),
        ),
    )
    .at(&field.name.span)
}

/// Leaf fields must not have a selection set; object fields must.
pub(crate) fn selection_shape_error(
    coordinate: &str,
    field_def: &Field,
    field_type: &GraphQLType,
    field: &ast::Field,
) -> Option<GraphQLError> {
    let message = match (field_type.is_leaf(), &field.selection_set) {
        (true, Some(_)) => format!(
            "field \"{coordinate}\" of type \"{}\" is a leaf and cannot have a selection set",
            field_def.type_annotation(),
        ),
        (false, None) => format!(
            "field \"{coordinate}\" of type \"{}\" must have a selection set",
            field_def.type_annotation(),
        ),
        _ => return None,
    };
    Some(GraphQLError::new(ErrorKind::SchemaBinding, message).at(&field.span))
}
