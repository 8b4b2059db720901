//! Running parsed operations against a [`Schema`](crate::schema::Schema).

mod arguments;
mod coercion_error;
mod document_validator;
mod execution_request;
mod execution_result;
mod executor;
mod input_coercer;
mod resolve_context;

pub use arguments::Arguments;
pub use coercion_error::CoercionError;
pub(crate) use document_validator::DocumentValidator;
pub use execution_request::ExecutionRequest;
pub use execution_result::ExecutionResult;
pub(crate) use executor::Executor;
pub(crate) use input_coercer::InputCoercer;
pub(crate) use input_coercer::VariableBindings;
pub use resolve_context::ResolveContext;

#[cfg(test)]
mod tests;
