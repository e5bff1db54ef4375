use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A WGS84 point as supplied by the mobile client. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Coordinate {
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Cache key: the coordinate rounded to 4 decimal places (~11m).
    ///
    /// Nearby lookups collapse onto the same key so repeated alerts from one
    /// area reuse a single reverse-geocode result.
    pub fn grid_key(&self) -> (i64, i64) {
        (
            (self.latitude * 10_000.0).round() as i64,
            (self.longitude * 10_000.0).round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_key_rounds_to_four_decimals() {
        let a = Coordinate::new(12.971_63, 77.594_88);
        let b = Coordinate::new(12.971_634, 77.594_882);
        assert_eq!(a.grid_key(), b.grid_key());

        let c = Coordinate::new(12.972_2, 77.594_88);
        assert_ne!(a.grid_key(), c.grid_key());
    }

    #[test]
    fn validates_latitude_range() {
        assert!(Coordinate::new(91.0, 0.0).validate().is_err());
        assert!(Coordinate::new(-91.0, 0.0).validate().is_err());
        assert!(Coordinate::new(90.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validates_longitude_range() {
        assert!(Coordinate::new(0.0, 180.5).validate().is_err());
        assert!(Coordinate::new(0.0, -180.0).validate().is_ok());
    }
}
