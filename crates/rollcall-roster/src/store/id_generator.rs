use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

/// Produces ids for new records.
pub trait IdGenerator: std::fmt::Debug + Send + Sync {
    fn next_id(&self) -> i64;

    /// Tells the generator about an id that is already taken, so it can avoid
    /// handing it out.
    fn reserve(&self, id: i64);
}

/// Hands out 1, 2, 3, ... skipping past any reserved id.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicI64,
}
impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    fn reserve(&self, id: i64) {
        self.next.fetch_max(id.saturating_add(1), Ordering::SeqCst);
    }
}
