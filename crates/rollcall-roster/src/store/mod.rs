mod id_generator;
mod in_memory_student_store;
mod student_store;

pub use id_generator::IdGenerator;
pub use id_generator::SequentialIds;
pub use in_memory_student_store::InMemoryStudentStore;
pub use student_store::StudentStore;
