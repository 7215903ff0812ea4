use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Largest array a run may declare unless the limits say otherwise.
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 1 << 24;

/// Bounds on a single run. Loops are unbounded by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Total number of while-loop iterations allowed across the whole run.
    pub max_iterations: Option<u64>,
    /// Largest element count a single `DeclareArray` may allocate.
    pub max_array_length: usize,
}

impl Limits {
    pub const fn with_max_iterations(max_iterations: u64) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
        }
    }

    pub const fn with_max_array_length(self, max_array_length: usize) -> Self {
        Self {
            max_array_length,
            ..self
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_iterations: None,
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
        }
    }
}

/// Requests that a run stop at its next loop iteration. Clones share the
/// same flag, so the handle can be moved to another thread.
#[derive(Debug, Clone, Default)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
}

impl InterruptHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clears the flag and reports whether it was set.
    pub(crate) fn take(&self) -> bool {
        self.flag.swap(false, Ordering::Relaxed)
    }
}
