use crate::NewStudent;
use crate::RosterError;
use crate::Student;
use crate::StudentPatch;

type Result<T> = std::result::Result<T, RosterError>;

/// Where student records live. Resolvers are the only callers.
///
/// Implementations are shared across concurrent requests: each method must
/// be atomic with respect to the others, and readers must never observe a
/// partially applied write.
pub trait StudentStore: Send + Sync {
    /// A snapshot of every record, in insertion order.
    fn list(&self) -> Result<Vec<Student>>;

    fn get(&self, id: i64) -> Result<Student>;

    /// Adds a record under a freshly generated id and returns it.
    fn insert(&self, new_student: NewStudent) -> Result<Student>;

    /// Applies the fields present in `patch` and returns the updated record.
    fn update(&self, id: i64, patch: StudentPatch) -> Result<Student>;

    /// Removes the record with `id` and returns it as it was.
    fn delete(&self, id: i64) -> Result<Student>;

    fn len(&self) -> Result<usize> {
        self.list().map(|students| students.len())
    }
}
