use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::execution::Arguments;
use crate::execution::CoercionError;
use crate::parser::ast;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::types::TypesMap;
use crate::value::InputValue;
use crate::value::Variables;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, CoercionError>;

/// How a variable declared by the operation gets its value.
#[derive(Clone, Copy, Debug)]
enum VariableBinding<'a> {
    /// Supplied with the request.
    Provided(&'a InputValue),

    /// Not supplied; the declaration's default literal applies.
    Default(&'a ast::Value),

    /// Not supplied and no default.
    Absent,

    /// Static validation: the value is unknown and accepted as-is.
    Unchecked,
}

/// The variables an operation declares, bound to request values.
#[derive(Debug)]
pub(crate) struct VariableBindings<'a> {
    bindings: HashMap<&'a str, (&'a ast::VariableDefinition, VariableBinding<'a>)>,
}
impl<'a> VariableBindings<'a> {
    pub fn for_operation(op: &'a ast::OperationDefinition, variables: &'a Variables) -> Self {
        let bindings = op
            .variable_definitions
            .iter()
            .map(|def| {
                let binding = match (variables.get(def.name.as_str()), &def.default_value) {
                    (Some(value), _) => VariableBinding::Provided(value),
                    (None, Some(default)) => VariableBinding::Default(default),
                    (None, None) => VariableBinding::Absent,
                };
                (def.name.as_str(), (def, binding))
            })
            .collect();
        Self { bindings }
    }

    /// Bindings for checking a document without request values.
    pub fn unchecked(op: &'a ast::OperationDefinition) -> Self {
        let bindings = op
            .variable_definitions
            .iter()
            .map(|def| (def.name.as_str(), (def, VariableBinding::Unchecked)))
            .collect();
        Self { bindings }
    }

    /// `true` if `name` is declared, was not supplied and has no default.
    fn is_absent(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some((_, VariableBinding::Absent)))
    }
}

/// Coerces request variables, argument literals and parameter defaults into
/// [`InputValue`]s of their declared types.
pub(crate) struct InputCoercer<'a> {
    types: &'a TypesMap,
}
impl<'a> InputCoercer<'a> {
    pub fn new(types: &'a TypesMap) -> Self {
        Self { types }
    }

    /// Builds the argument map for one field selection.
    ///
    /// Every problem is reported, not just the first. Omitted arguments take
    /// the parameter default; omitted required arguments are errors.
    pub fn coerce_arguments(
        &self,
        parent_type_name: &str,
        field_def: &Field,
        field: &ast::Field,
        variables: &VariableBindings<'_>,
    ) -> std::result::Result<Arguments, Vec<GraphQLError>> {
        let field_coord = format!("{parent_type_name}.{}", field_def.name());
        let mut errors = vec![];
        let mut seen = HashSet::new();
        let mut arguments = Arguments::new();

        for arg in &field.arguments {
            let arg_name = arg.name.as_str();
            if !seen.insert(arg_name) {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::ArgumentCoercion,
                        format!(
                            "argument \"{arg_name}\" is given more than once on field \
                            \"{field_coord}\"",
                        ),
                    )
                    .at(&arg.span),
                );
                continue;
            }

            let Some(param) = field_def.parameter_named(arg_name) else {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::ArgumentCoercion,
                        format!("unknown argument \"{arg_name}\" on field \"{field_coord}\""),
                    )
                    .at(&arg.span),
                );
                continue;
            };

            // An unsupplied variable counts as an omitted argument.
            if let ast::Value::Variable(var) = &arg.value
                && variables.is_absent(var.name.as_str())
                && !param.is_required()
            {
                if let Some(default) = param.get_default_value() {
                    arguments.insert(arg_name, default.clone());
                }
                continue;
            }

            match self.coerce_literal(param.type_annotation(), &arg.value, variables) {
                Ok(value) => arguments.insert(arg_name, value),
                Err(err) => errors.push(
                    GraphQLError::new(
                        ErrorKind::ArgumentCoercion,
                        format!(
                            "invalid value for argument \"{arg_name}\" of field \
                            \"{field_coord}\": {err}",
                        ),
                    )
                    .at(arg.value.span()),
                ),
            }
        }

        for param in field_def.parameters() {
            if seen.contains(param.name()) {
                continue;
            }
            if let Some(default) = param.get_default_value() {
                arguments.insert(param.name(), default.clone());
            } else if param.is_required() {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::ArgumentCoercion,
                        format!(
                            "missing required argument \"{}\" of type \"{}\" on field \
                            \"{field_coord}\"",
                            param.name(),
                            param.type_annotation(),
                        ),
                    )
                    .at(&field.name.span),
                );
            }
        }

        if errors.is_empty() {
            Ok(arguments)
        } else {
            Err(errors)
        }
    }

    /// Coerces a value that did not come from the document: a request
    /// variable or a parameter default.
    pub fn coerce_value(&self, type_annot: &TypeAnnotation, value: &InputValue) -> Result<InputValue> {
        match type_annot {
            TypeAnnotation::NonNull(inner) => {
                if value.is_null() {
                    return Err(CoercionError::NullForNonNull {
                        expected: type_annot.clone(),
                    });
                }
                self.coerce_value(inner, value)
            },

            TypeAnnotation::List(inner) => match value {
                InputValue::Null => Ok(InputValue::Null),
                InputValue::List(items) => items
                    .iter()
                    .map(|item| self.coerce_value(inner, item))
                    .collect::<Result<Vec<_>>>()
                    .map(InputValue::List),
                single => Ok(InputValue::List(vec![self.coerce_value(inner, single)?])),
            },

            TypeAnnotation::Named(type_name) => {
                if value.is_null() {
                    return Ok(InputValue::Null);
                }
                self.coerce_named_value(type_name, value)
            },
        }
    }

    /// Coerces a literal (or variable reference) written in the document.
    pub fn coerce_literal(
        &self,
        type_annot: &TypeAnnotation,
        literal: &ast::Value,
        variables: &VariableBindings<'_>,
    ) -> Result<InputValue> {
        if let ast::Value::Variable(var) = literal {
            return self.coerce_variable(type_annot, var, variables);
        }

        match type_annot {
            TypeAnnotation::NonNull(inner) => {
                if literal.is_null() {
                    return Err(CoercionError::NullForNonNull {
                        expected: type_annot.clone(),
                    });
                }
                self.coerce_literal(inner, literal, variables)
            },

            TypeAnnotation::List(inner) => match literal {
                ast::Value::Null { .. } => Ok(InputValue::Null),
                ast::Value::List { values, .. } => values
                    .iter()
                    .map(|item| self.coerce_literal(inner, item, variables))
                    .collect::<Result<Vec<_>>>()
                    .map(InputValue::List),
                single => Ok(InputValue::List(vec![
                    self.coerce_literal(inner, single, variables)?,
                ])),
            },

            TypeAnnotation::Named(type_name) => {
                if literal.is_null() {
                    return Ok(InputValue::Null);
                }
                self.coerce_named_literal(type_name, literal)
            },
        }
    }

    fn coerce_variable(
        &self,
        type_annot: &TypeAnnotation,
        var: &ast::VariableValue,
        variables: &VariableBindings<'_>,
    ) -> Result<InputValue> {
        let var_name = var.name.as_str();
        let Some((def, binding)) = variables.bindings.get(var_name) else {
            return Err(CoercionError::UndefinedVariable {
                name: var_name.to_string(),
            });
        };

        let declared = TypeAnnotation::from_ast(&def.type_annotation);
        match binding {
            VariableBinding::Unchecked => Ok(InputValue::Null),

            VariableBinding::Provided(value) => {
                if declared.is_non_null() && value.is_null() {
                    return Err(CoercionError::NullForNonNull { expected: declared });
                }
                self.coerce_value(type_annot, value)
            },

            VariableBinding::Default(default) => {
                self.coerce_literal(type_annot, default, variables)
            },

            VariableBinding::Absent if declared.is_non_null() => {
                Err(CoercionError::MissingVariable {
                    name: var_name.to_string(),
                    type_annotation: declared,
                })
            },

            VariableBinding::Absent => self.coerce_value(type_annot, &InputValue::Null),
        }
    }

    fn lookup_type(&self, type_name: &str) -> Result<&'a GraphQLType> {
        self.types.get(type_name).ok_or_else(|| CoercionError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    fn coerce_named_value(&self, type_name: &str, value: &InputValue) -> Result<InputValue> {
        let wrong_kind = || CoercionError::WrongKind {
            expected: type_name.to_string(),
            found: value.kind_name(),
        };

        match (self.lookup_type(type_name)?, value) {
            (GraphQLType::Bool, InputValue::Boolean(b)) => Ok(InputValue::Boolean(*b)),

            (GraphQLType::Float, InputValue::Float(f)) => Ok(InputValue::Float(*f)),
            (GraphQLType::Float, InputValue::Int(i)) => Ok(InputValue::Float(*i as f64)),

            (GraphQLType::ID, InputValue::String(s)) => Ok(InputValue::String(s.clone())),
            (GraphQLType::ID, InputValue::Int(i)) => Ok(InputValue::String(i.to_string())),
            (GraphQLType::ID, InputValue::Scalar(id)) => {
                Ok(InputValue::String(id.as_str().to_string()))
            },

            (GraphQLType::Int, InputValue::Int(i)) => i32::try_from(*i)
                .map(|_| InputValue::Int(*i))
                .map_err(|_| CoercionError::IntOutOfRange { value: *i }),

            (GraphQLType::String, InputValue::String(s)) => Ok(InputValue::String(s.clone())),

            (GraphQLType::Scalar(scalar), value) => scalar
                .codec()
                .parse_variable(value)
                .map(InputValue::Scalar)
                .map_err(|source| CoercionError::ScalarParse {
                    type_name: type_name.to_string(),
                    source,
                }),

            (GraphQLType::Object(_), _) => Err(CoercionError::NotAnInputType {
                type_name: type_name.to_string(),
            }),

            _ => Err(wrong_kind()),
        }
    }

    fn coerce_named_literal(&self, type_name: &str, literal: &ast::Value) -> Result<InputValue> {
        let wrong_kind = || CoercionError::WrongKind {
            expected: type_name.to_string(),
            found: literal.kind_name(),
        };

        match (self.lookup_type(type_name)?, literal) {
            (GraphQLType::Bool, ast::Value::Boolean { value, .. }) => {
                Ok(InputValue::Boolean(*value))
            },

            (GraphQLType::Float, ast::Value::Float { value, .. }) => Ok(InputValue::Float(*value)),
            (GraphQLType::Float, ast::Value::Int { value, .. }) => {
                Ok(InputValue::Float(f64::from(*value)))
            },

            (GraphQLType::ID, ast::Value::String { value, .. }) => {
                Ok(InputValue::String(value.clone()))
            },
            (GraphQLType::ID, ast::Value::Int { value, .. }) => {
                Ok(InputValue::String(value.to_string()))
            },

            (GraphQLType::Int, ast::Value::Int { value, .. }) => {
                Ok(InputValue::Int(i64::from(*value)))
            },

            (GraphQLType::String, ast::Value::String { value, .. }) => {
                Ok(InputValue::String(value.clone()))
            },

            (GraphQLType::Scalar(scalar), literal) => scalar
                .codec()
                .parse_literal(literal)
                .map(InputValue::Scalar)
                .ok_or_else(|| CoercionError::InvalidScalarLiteral {
                    found: literal.kind_name(),
                    type_name: type_name.to_string(),
                }),

            (GraphQLType::Object(_), _) => Err(CoercionError::NotAnInputType {
                type_name: type_name.to_string(),
            }),

            _ => Err(wrong_kind()),
        }
    }
}
