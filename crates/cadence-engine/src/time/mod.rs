//! Tick timing utilities.
//!
//! The scheduler's timer chain drifts with the tick action's own cost, so
//! animations should measure elapsed time instead of assuming the configured
//! rate. Intended usage:
//! - one [`FrameClock`] per animation, sampled once per tick
//! - a [`RateMeter`] where the achieved rate needs to be observable

mod frame_clock;
mod meter;

pub use frame_clock::{FrameClock, FrameSample};
pub use meter::RateMeter;
