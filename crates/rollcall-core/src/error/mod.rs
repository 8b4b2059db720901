//! Errors reported in an execution response, and the error type resolvers
//! return.

mod error_kind;
mod field_error;
mod graphql_error;
mod response_path;

pub use error_kind::ErrorKind;
pub use field_error::FieldError;
pub use graphql_error::ErrorExtensions;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;
pub use response_path::format_path;
