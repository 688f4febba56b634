//! Serialized invocation gate
//!
//! [`SerializedInvoker`] runs at most one unit of work at a time. Backends
//! route their writes to a shared target (a file handle, a console stream)
//! through it so concurrent callers never interleave partial writes.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

/// Mutual-exclusion gate owned by one logger instance.
///
/// The gate is **not reentrant**: a unit of work that calls back into
/// [`locked_invoke`](Self::locked_invoke) on the same invoker deadlocks.
///
/// # Example
///
/// ```
/// use rust_logger_base::SerializedInvoker;
///
/// let invoker = SerializedInvoker::new();
/// let value = invoker.locked_invoke(|| Ok(21 * 2)).unwrap();
/// assert_eq!(value, 42);
/// assert!(!invoker.is_locked());
/// ```
#[derive(Debug, Default)]
pub struct SerializedInvoker {
    gate: Mutex<()>,
    /// Diagnostic only; never consulted for control flow
    locked: AtomicBool,
}

/// Resets the locked flag when the unit of work exits, however it exits.
struct LockedFlag<'a>(&'a AtomicBool);

impl<'a> LockedFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for LockedFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SerializedInvoker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gate: Mutex::new(()),
            locked: AtomicBool::new(false),
        }
    }

    /// Run `action` under the gate and return its result.
    ///
    /// The flag is reset and the gate released before the outcome reaches
    /// the caller. An `Err` from `action` is returned unchanged; a panic is
    /// resumed in the caller once the gate is free, so a failing unit of work
    /// never leaves the invoker locked.
    ///
    /// # Errors
    ///
    /// Whatever `action` returns.
    pub fn locked_invoke<T, F>(&self, action: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let outcome = {
            let _gate = self.gate.lock();
            let _flag = LockedFlag::raise(&self.locked);
            panic::catch_unwind(AssertUnwindSafe(action))
            // _flag drops before _gate
        };

        match outcome {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Like [`locked_invoke`](Self::locked_invoke), for callers holding an
    /// optional unit of work.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] when `action` is `None`, otherwise
    /// whatever `action` returns.
    pub fn locked_invoke_opt<T, F>(&self, action: Option<F>) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        match action {
            Some(action) => self.locked_invoke(action),
            None => Err(LoggerError::invalid_argument("Required argument action.")),
        }
    }

    /// Whether a unit of work is executing right now
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}
