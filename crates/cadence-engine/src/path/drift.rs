use super::geo::{GeoPoint, MoveDirection, shift_points};

/// Accumulating drift animation over a fixed base path.
///
/// Each step adds the active direction's offset to a running total and
/// re-derives the shifted path from the base points. Re-deriving (instead of
/// mutating the last result) keeps the shape exact: downstream consumers may
/// clamp or round points they are handed, and feeding those back in would
/// deform the path over time.
#[derive(Debug, Clone)]
pub struct PathDrift {
    base: Vec<GeoPoint>,
    direction: Option<MoveDirection>,
    step_deg: f64,
    lat_offset: f64,
    lng_offset: f64,
}

impl PathDrift {
    /// Creates a drift over `base` with no active direction.
    pub fn new(base: Vec<GeoPoint>, step_deg: f64) -> Self {
        Self {
            base,
            direction: None,
            step_deg,
            lat_offset: 0.0,
            lng_offset: 0.0,
        }
    }

    /// Sets or clears the active direction. `None` freezes the drift in
    /// place without resetting the accumulated offset.
    pub fn set_direction(&mut self, direction: Option<MoveDirection>) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Option<MoveDirection> {
        self.direction
    }

    pub fn set_step_deg(&mut self, step_deg: f64) {
        self.step_deg = step_deg;
    }

    /// Accumulated `(lat, lng)` offset in degrees.
    pub fn offset(&self) -> (f64, f64) {
        (self.lat_offset, self.lng_offset)
    }

    /// Advances one step in the active direction and returns the shifted
    /// path. With no active direction this is the same as [`current`](Self::current).
    pub fn step(&mut self) -> Vec<GeoPoint> {
        if let Some(direction) = self.direction {
            self.lat_offset += direction.lat_step(self.step_deg);
            self.lng_offset += direction.lng_step(self.step_deg);
        }
        self.current()
    }

    /// The base path shifted by the accumulated offset.
    pub fn current(&self) -> Vec<GeoPoint> {
        shift_points(&self.base, self.lat_offset, self.lng_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ]
    }

    #[test]
    fn step_without_direction_returns_base() {
        let mut drift = PathDrift::new(base(), 0.1);
        assert_eq!(drift.step(), base());
        assert_eq!(drift.offset(), (0.0, 0.0));
    }

    #[test]
    fn steps_accumulate_along_the_active_axis() {
        let mut drift = PathDrift::new(base(), 0.25);
        drift.set_direction(Some(MoveDirection::Up));

        drift.step();
        drift.step();
        assert_eq!(drift.offset(), (0.5, 0.0));
        assert_eq!(drift.current()[0], GeoPoint::new(0.5, 0.0));
    }

    #[test]
    fn opposite_steps_return_to_base_exactly() {
        let mut drift = PathDrift::new(base(), 0.25);

        drift.set_direction(Some(MoveDirection::Right));
        for _ in 0..4 {
            drift.step();
        }
        drift.set_direction(Some(MoveDirection::Left));
        for _ in 0..4 {
            drift.step();
        }

        assert_eq!(drift.offset(), (0.0, 0.0));
        assert_eq!(drift.current(), base());
    }

    #[test]
    fn clearing_direction_freezes_the_offset() {
        let mut drift = PathDrift::new(base(), 1.0);
        drift.set_direction(Some(MoveDirection::Down));
        drift.step();

        drift.set_direction(None);
        drift.step();
        assert_eq!(drift.offset(), (-1.0, 0.0));
    }

    #[test]
    fn step_size_changes_apply_to_later_steps() {
        let mut drift = PathDrift::new(base(), 1.0);
        drift.set_direction(Some(MoveDirection::Up));
        drift.step();

        drift.set_step_deg(0.5);
        drift.step();
        assert_eq!(drift.offset(), (1.5, 0.0));
    }
}
