use crate::NewStudent;
use crate::RosterError;
use crate::StudentPatch;
use crate::StudentStore;
use rollcall_core::error::FieldError;
use rollcall_core::execution::Arguments;
use rollcall_core::schema::Schema;
use rollcall_core::schema::SchemaBuildError;
use rollcall_core::types::Field;
use rollcall_core::types::ObjectTypeBuilder;
use rollcall_core::types::OpaqueIdCodec;
use rollcall_core::types::Parameter;
use rollcall_core::types::ScalarType;
use rollcall_core::types::TypeAnnotation;
use rollcall_core::value::FieldValue;
use std::sync::Arc;

/// The custom scalar carrying a student's national identifier.
pub const NATIONAL_ID_SCALAR_NAME: &str = "CustomScalarType";

fn student() -> TypeAnnotation {
    TypeAnnotation::named("Student")
}

fn id_param() -> Parameter {
    Parameter::new("id", TypeAnnotation::named("Int").non_null())
}

/// Builds the roster schema with every resolver bound to `store`.
///
/// ```graphql
/// type Query {
///   student(id: Int!): Student
///   list: [Student]
/// }
///
/// type Mutation {
///   enroll(name: String!, des: String, score: Float, nationalid: CustomScalarType): Student
///   update(id: Int!, name: String, des: String, score: Float): Student
///   leave(id: Int!): Student
/// }
/// ```
pub fn build_roster_schema(store: Arc<dyn StudentStore>) -> Result<Schema, SchemaBuildError> {
    Schema::builder()
        .add_scalar_type(
            ScalarType::new(NATIONAL_ID_SCALAR_NAME, OpaqueIdCodec).description(
                "The `CustomScalarType` scalar type represents an opaque national identifier.",
            ),
        )
        .add_object_type(
            ObjectTypeBuilder::new("Student")
                .description("A student on the roster")
                .field(Field::new("id", TypeAnnotation::named("Int")))
                .field(Field::new("name", TypeAnnotation::named("String")))
                .field(Field::new("des", TypeAnnotation::named("String")))
                .field(Field::new("score", TypeAnnotation::named("Float")))
                .field(Field::new("nationalid", TypeAnnotation::named(NATIONAL_ID_SCALAR_NAME))),
        )
        .add_object_type(query_type(&store))
        .add_object_type(mutation_type(&store))
        .build()
}

fn query_type(store: &Arc<dyn StudentStore>) -> ObjectTypeBuilder {
    let get_store = store.clone();
    let list_store = store.clone();

    ObjectTypeBuilder::new("Query")
        .field(
            Field::new("student", student())
                .description("Get student by id")
                .parameter(id_param())
                .resolver(move |ctx| {
                    let id = ctx.arguments().require_i64("id")?;
                    Ok(FieldValue::object(get_store.get(id)?))
                }),
        )
        .field(
            Field::new("list", TypeAnnotation::list(student()))
                .description("Get students list")
                .resolver(move |_ctx| {
                    let students = list_store.list()?;
                    Ok(FieldValue::list(students.into_iter().map(FieldValue::object)))
                }),
        )
}

fn mutation_type(store: &Arc<dyn StudentStore>) -> ObjectTypeBuilder {
    let enroll_store = store.clone();
    let update_store = store.clone();
    let leave_store = store.clone();

    ObjectTypeBuilder::new("Mutation")
        .field(
            Field::new("enroll", student())
                .description("Enroll new student")
                .parameter(Parameter::new("name", TypeAnnotation::named("String").non_null()))
                .parameter(Parameter::new("des", TypeAnnotation::named("String")))
                .parameter(Parameter::new("score", TypeAnnotation::named("Float")))
                .parameter(Parameter::new(
                    "nationalid",
                    TypeAnnotation::named(NATIONAL_ID_SCALAR_NAME),
                ))
                .resolver(move |ctx| {
                    let new_student = new_student_from_args(ctx.arguments())?;
                    Ok(FieldValue::object(enroll_store.insert(new_student)?))
                }),
        )
        .field(
            Field::new("update", student())
                .description("Update student by id")
                .parameter(id_param())
                .parameter(Parameter::new("name", TypeAnnotation::named("String")))
                .parameter(Parameter::new("des", TypeAnnotation::named("String")))
                .parameter(Parameter::new("score", TypeAnnotation::named("Float")))
                .resolver(move |ctx| {
                    let id = ctx.arguments().require_i64("id")?;
                    let patch = patch_from_args(ctx.arguments())?;
                    Ok(FieldValue::object(update_store.update(id, patch)?))
                }),
        )
        .field(
            Field::new("leave", student())
                .description("Student leave by id")
                .parameter(id_param())
                .resolver(move |ctx| {
                    let id = ctx.arguments().require_i64("id")?;
                    Ok(FieldValue::object(leave_store.delete(id)?))
                }),
        )
}

fn new_student_from_args(args: &Arguments) -> Result<NewStudent, FieldError> {
    let name = args.get_str("name")?.ok_or_else(|| {
        RosterError::InvalidArgument("name must not be null".to_string())
    })?;
    Ok(NewStudent {
        name: name.to_string(),
        description: args.get_str("des")?.map(str::to_string),
        score: args.get_f64("score")?.unwrap_or_default(),
        national_id: args.get_scalar("nationalid")?,
    })
}

/// Arguments that were not given are left untouched. `des: null` clears the
/// description; `null` for a name or score is rejected.
fn patch_from_args(args: &Arguments) -> Result<StudentPatch, FieldError> {
    let mut patch = StudentPatch::default();

    if args.contains("name") {
        let name = args.get_str("name")?.ok_or_else(|| {
            RosterError::InvalidArgument("name cannot be set to null".to_string())
        })?;
        patch.name = Some(name.to_string());
    }
    if args.contains("des") {
        patch.description = Some(args.get_str("des")?.map(str::to_string));
    }
    if args.contains("score") {
        let score = args.get_f64("score")?.ok_or_else(|| {
            RosterError::InvalidArgument("score cannot be set to null".to_string())
        })?;
        patch.score = Some(score);
    }

    Ok(patch)
}
