//! Geographic path animation helpers.
//!
//! Plain-degree coordinates and the stepwise translation logic used by
//! scheduler-driven path animations. No projection or rendering here; a
//! point is just a latitude/longitude pair.

mod drift;
mod geo;

pub use drift::PathDrift;
pub use geo::{GeoPoint, MoveDirection, shift_point_lists, shift_points};
