//! Frame scheduling.
//!
//! A [`FrameScheduler`] drives a caller-supplied tick action at an
//! approximate target rate by chaining single-shot timers on an
//! [`EventQueue`](crate::queue::EventQueue). It owns no animation logic; it
//! is purely a timing driver.

mod frame_scheduler;

pub use frame_scheduler::{DEFAULT_FRAME_RATE_FPS, FrameScheduler};
