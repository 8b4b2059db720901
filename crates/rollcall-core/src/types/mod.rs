//! The type registry: built-in and custom scalars, object types, their fields
//! and parameters, and the builders used to declare them.

mod field;
mod graphql_type;
mod object_type;
mod object_type_builder;
mod opaque_id_codec;
mod parameter;
mod scalar_codec;
mod scalar_type;
mod type_annotation;
mod types_map_builder;

pub use field::Field;
pub use field::Resolver;
pub use graphql_type::GraphQLType;
pub use object_type::ObjectType;
pub use object_type_builder::ObjectTypeBuilder;
pub use opaque_id_codec::OpaqueIdCodec;
pub use parameter::Parameter;
pub use scalar_codec::ScalarCodec;
pub use scalar_codec::ScalarCodecError;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use types_map_builder::TypesMap;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
