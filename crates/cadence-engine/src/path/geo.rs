/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the point translated by the given offsets, in degrees.
    #[inline]
    pub fn offset(self, lat_by: f64, lng_by: f64) -> Self {
        Self::new(self.lat + lat_by, self.lng + lng_by)
    }
}

/// Compass direction for stepwise movement, one axis per direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Latitude change for one step of `step_deg`.
    #[inline]
    pub fn lat_step(self, step_deg: f64) -> f64 {
        match self {
            MoveDirection::Up => step_deg,
            MoveDirection::Down => -step_deg,
            MoveDirection::Left | MoveDirection::Right => 0.0,
        }
    }

    /// Longitude change for one step of `step_deg`.
    #[inline]
    pub fn lng_step(self, step_deg: f64) -> f64 {
        match self {
            MoveDirection::Right => step_deg,
            MoveDirection::Left => -step_deg,
            MoveDirection::Up | MoveDirection::Down => 0.0,
        }
    }
}

/// Translates every point by the same offset.
pub fn shift_points(points: &[GeoPoint], lat_by: f64, lng_by: f64) -> Vec<GeoPoint> {
    points.iter().map(|p| p.offset(lat_by, lng_by)).collect()
}

/// Translates every ring/segment of a nested point list by the same offset.
pub fn shift_point_lists(lists: &[Vec<GeoPoint>], lat_by: f64, lng_by: f64) -> Vec<Vec<GeoPoint>> {
    lists
        .iter()
        .map(|list| shift_points(list, lat_by, lng_by))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_step_one_axis_only() {
        assert_eq!(MoveDirection::Up.lat_step(0.5), 0.5);
        assert_eq!(MoveDirection::Up.lng_step(0.5), 0.0);
        assert_eq!(MoveDirection::Down.lat_step(0.5), -0.5);
        assert_eq!(MoveDirection::Left.lng_step(0.5), -0.5);
        assert_eq!(MoveDirection::Right.lng_step(0.5), 0.5);
        assert_eq!(MoveDirection::Right.lat_step(0.5), 0.0);
    }

    #[test]
    fn shift_points_translates_uniformly() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 2.0)];
        let shifted = shift_points(&points, 0.5, -1.0);
        assert_eq!(
            shifted,
            vec![GeoPoint::new(0.5, -1.0), GeoPoint::new(1.5, 1.0)]
        );
    }

    #[test]
    fn shift_point_lists_preserves_structure() {
        let rings = vec![
            vec![GeoPoint::new(0.0, 0.0)],
            vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)],
        ];
        let shifted = shift_point_lists(&rings, 1.0, 1.0);
        assert_eq!(shifted.len(), 2);
        assert_eq!(shifted[0], vec![GeoPoint::new(1.0, 1.0)]);
        assert_eq!(shifted[1].len(), 2);
    }
}
