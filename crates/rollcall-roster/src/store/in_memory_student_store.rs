use crate::IdGenerator;
use crate::NewStudent;
use crate::RosterError;
use crate::SequentialIds;
use crate::Student;
use crate::StudentPatch;
use crate::StudentStore;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Default)]
struct StoreState {
    students: Vec<Student>,
}
impl StoreState {
    fn position(&self, id: i64) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }
}

/// A [`StudentStore`] kept in memory behind a read/write lock.
///
/// Reads share the lock and return clones. Writes hold it exclusively for
/// their whole read-modify-write, so concurrent mutations are never lost.
/// Ids are unique, which makes `delete` remove at most one record.
#[derive(Debug)]
pub struct InMemoryStudentStore {
    ids: Box<dyn IdGenerator>,
    state: RwLock<StoreState>,
}
impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// A store preloaded with `records`, in order. New ids start after the
    /// largest preloaded one.
    pub fn from_records(records: impl IntoIterator<Item = Student>) -> Result<Self> {
        Self::from_records_with_id_generator(records, SequentialIds::new())
    }

    /// Like [`from_records`](Self::from_records), with new ids drawn from
    /// `ids`. Every preloaded id is reserved with the generator.
    pub fn from_records_with_id_generator(
        records: impl IntoIterator<Item = Student>,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self> {
        let store = Self::with_id_generator(ids);
        {
            let mut state = store.write()?;
            for student in records {
                validate_id(student.id)?;
                if state.position(student.id).is_some() {
                    return Err(RosterError::DuplicateId { id: student.id });
                }
                validate_name(&student.name)?;
                validate_score(student.score)?;
                store.ids.reserve(student.id);
                state.students.push(student);
            }
            log::debug!("preloaded {} student record(s)", state.students.len());
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| RosterError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| RosterError::LockPoisoned)
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for InMemoryStudentStore {
    fn list(&self) -> Result<Vec<Student>> {
        Ok(self.read()?.students.clone())
    }

    fn get(&self, id: i64) -> Result<Student> {
        let state = self.read()?;
        state
            .position(id)
            .map(|idx| state.students[idx].clone())
            .ok_or(RosterError::NotFound { id })
    }

    fn insert(&self, new_student: NewStudent) -> Result<Student> {
        validate_name(&new_student.name)?;
        validate_score(new_student.score)?;

        let mut state = self.write()?;
        let id = self.ids.next_id();
        validate_id(id)?;
        if state.position(id).is_some() {
            return Err(RosterError::DuplicateId { id });
        }

        let student = new_student.into_student(id);
        state.students.push(student.clone());
        log::debug!("enrolled student {id}");
        Ok(student)
    }

    fn update(&self, id: i64, patch: StudentPatch) -> Result<Student> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(score) = patch.score {
            validate_score(score)?;
        }

        let mut state = self.write()?;
        let idx = state.position(id).ok_or(RosterError::NotFound { id })?;
        let student = &mut state.students[idx];
        patch.apply_to(student);
        log::debug!("updated student {id}");
        Ok(student.clone())
    }

    fn delete(&self, id: i64) -> Result<Student> {
        let mut state = self.write()?;
        let idx = state.position(id).ok_or(RosterError::NotFound { id })?;
        let removed = state.students.remove(idx);
        log::debug!("removed student {id}");
        Ok(removed)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.students.len())
    }
}

/// Ids are exposed as GraphQL `Int`, which is 32-bit.
fn validate_id(id: i64) -> Result<()> {
    if i32::try_from(id).is_err() {
        return Err(RosterError::InvalidArgument(format!(
            "id {id} does not fit in a 32-bit integer"
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RosterError::InvalidArgument("name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_score(score: f64) -> Result<()> {
    if !score.is_finite() {
        return Err(RosterError::InvalidArgument(format!(
            "score must be a finite number, found {score}"
        )));
    }
    Ok(())
}
