mod roster_schema_tests;
mod student_tests;

use crate::InMemoryStudentStore;
use crate::build_roster_schema;
use rollcall_core::execution::ExecutionRequest;
use rollcall_core::execution::ExecutionResult;
use rollcall_core::schema::Schema;
use std::sync::Arc;

/// A fresh store and a roster schema bound to it.
pub(super) fn roster() -> (Arc<InMemoryStudentStore>, Schema) {
    let store = Arc::new(InMemoryStudentStore::new());
    let schema = build_roster_schema(store.clone()).unwrap();
    (store, schema)
}

pub(super) fn execute(schema: &Schema, query: &str) -> ExecutionResult {
    schema.execute(&ExecutionRequest::new(query))
}

/// Executes `query` and asserts it produced no errors.
pub(super) fn execute_ok(schema: &Schema, query: &str) -> serde_json::Value {
    let result = execute(schema, query);
    assert!(result.is_ok(), "unexpected errors: {:#?}", result.errors);
    result.to_json()["data"].clone()
}
