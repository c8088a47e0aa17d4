use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-flight marker shared between a modal and its pending mutation.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    inner: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    /// Returns false if another mutation already holds the flag.
    pub(crate) fn try_acquire(&self) -> bool {
        self.inner
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn release(&self) {
        self.inner.store(false, Ordering::SeqCst);
    }
}
