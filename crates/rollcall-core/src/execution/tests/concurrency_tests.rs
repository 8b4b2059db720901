use crate::execution::tests::execute;
use crate::execution::tests::library_schema;
use crate::schema::Schema;
use rayon::prelude::*;
use std::sync::Arc;

#[test]
fn schema_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

/// Concurrent readers share one schema and all see the same result.
#[test]
fn concurrent_queries_share_the_schema() {
    let schema = Arc::new(library_schema());
    let expected = execute(&schema, "{ books { id title } }");

    let results: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| execute(&schema, "{ books { id title } }"))
        .collect();
    assert!(results.iter().all(|result| *result == expected));
}

/// Concurrent mutations are all applied; the resolver owns its own
/// synchronization.
#[test]
fn concurrent_mutations_are_not_lost() {
    let schema = Arc::new(library_schema());
    (0..100).into_par_iter().for_each(|_| {
        let result = execute(&schema, "mutation { bump }");
        assert!(result.is_ok());
    });
    let result = execute(&schema, "{ counter }");
    assert_eq!(result.to_json()["data"]["counter"], 100);
}
