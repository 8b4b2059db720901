//! Values flowing into (arguments, variables) and out of (resolver results,
//! response data) the executor.

mod field_value;
mod graphql_object;
mod input_value;
mod output_value;
mod scalar_value;

pub use field_value::FieldValue;
pub use graphql_object::GraphQLObject;
pub use input_value::InputValue;
pub use input_value::Variables;
pub use output_value::OutputObject;
pub use output_value::OutputValue;
pub use scalar_value::ScalarValue;
