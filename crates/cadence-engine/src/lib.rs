//! Cadence engine crate.
//!
//! Frame-scheduling and animation-driving primitives: a delayed-callback
//! queue port with deterministic and real-time implementations, a frame
//! scheduler that chains single-shot timers at a target rate, and the
//! timing/path helpers that scheduler-driven animations typically need.

pub mod queue;
pub mod sched;
pub mod time;
pub mod path;

pub mod logging;
