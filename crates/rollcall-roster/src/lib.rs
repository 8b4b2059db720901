//! The student roster: the `Student` record, the store it lives in, and the
//! schema whose resolvers read and write that store.
//!
//! ```
//! use rollcall_core::execution::ExecutionRequest;
//! use rollcall_roster::InMemoryStudentStore;
//! use rollcall_roster::build_roster_schema;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryStudentStore::new());
//! let schema = build_roster_schema(store).unwrap();
//! let result = schema.execute(&ExecutionRequest::new(
//!     r#"mutation { enroll(name: "Alice", score: 4.0) { id name } }"#,
//! ));
//! assert_eq!(
//!     serde_json::to_string(&result.data).unwrap(),
//!     r#"{"enroll":{"id":1,"name":"Alice"}}"#,
//! );
//! ```

mod roster_error;
mod roster_schema;
mod store;
mod student;

pub use roster_error::RosterError;
pub use roster_schema::NATIONAL_ID_SCALAR_NAME;
pub use roster_schema::build_roster_schema;
pub use store::IdGenerator;
pub use store::InMemoryStudentStore;
pub use store::SequentialIds;
pub use store::StudentStore;
pub use student::NewStudent;
pub use student::Student;
pub use student::StudentPatch;

#[cfg(test)]
mod tests;
