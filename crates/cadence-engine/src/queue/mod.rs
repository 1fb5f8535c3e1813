//! Deferred-execution port.
//!
//! This module defines the contract between the scheduler and whatever owns
//! the thread's callback queue, plus two implementations:
//! - [`ManualQueue`] — simulated clock, for tests and headless simulation
//! - [`RunLoop`] — real single-threaded timer loop

mod manual;
mod run_loop;

pub use manual::ManualQueue;
pub use run_loop::RunLoop;

use std::time::Duration;

/// Boxed callback executed once by the owning queue.
pub type QueueCallback = Box<dyn FnOnce()>;

/// Opaque handle for a scheduled-but-not-yet-fired callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TickToken(u64);

impl TickToken {
    /// Wraps a queue-assigned sequence number.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Single-threaded delayed-callback queue.
///
/// Contract:
/// - `post_delayed` runs `callback` on the owning thread once `delay` has
///   elapsed; callbacks with equal deadlines run in post order.
/// - `cancel` is reliable when invoked before the callback fires; cancelling
///   an already-fired or unknown token is a no-op.
///
/// All calls must come from the owning thread. Implementations provide no
/// internal locking; this is a precondition, not a checked error.
pub trait EventQueue {
    fn post_delayed(&self, delay: Duration, callback: QueueCallback) -> TickToken;

    fn cancel(&self, token: TickToken);
}
