use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A shared cancellation flag.
///
/// Every clone observes the same flag. Long-running loops check
/// `is_cancelled()` once per iteration and return when it is set.
#[derive(Clone, Debug, Default)]
pub struct Cancel {
    flag: Arc<AtomicBool>,
}

impl Cancel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
