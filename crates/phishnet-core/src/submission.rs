//! In-flight guard against double submission of a form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared per-form flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    busy: Arc<AtomicBool>,
}

/// Held while a submission is pending; releases the guard on drop.
#[derive(Debug)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard, or `None` if a submission is already pending.
    pub fn try_begin(&self) -> Option<InFlight> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
