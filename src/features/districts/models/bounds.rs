use crate::shared::types::Coordinate;

/// A named rectangular lat/lon region. Bounds are inclusive on all four
/// edges. Static data, read-only at runtime.
#[derive(Debug, Clone, Copy)]
pub struct DistrictBound {
    pub id: &'static str,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl DistrictBound {
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude <= self.north
            && coordinate.latitude >= self.south
            && coordinate.longitude <= self.east
            && coordinate.longitude >= self.west
    }
}

/// District returned for coordinates inside [`SIMULATOR_BOUND`].
pub const SIMULATOR_DISTRICT: &str = "simulator_test";

/// Development-environment escape hatch: the default location of phone
/// simulators (San Francisco). Checked before any real geography.
pub const SIMULATOR_BOUND: DistrictBound = DistrictBound {
    id: SIMULATOR_DISTRICT,
    north: 37.8,
    south: 37.7,
    east: -122.3,
    west: -122.5,
};

/// District-granularity rectangles, scanned in order: first match wins, so
/// smaller districts must be listed before broader ones they overlap.
pub const DISTRICT_BOUNDS: &[DistrictBound] = &[
    DistrictBound {
        id: "bengaluru_urban",
        north: 13.20,
        south: 12.70,
        east: 77.90,
        west: 77.30,
    },
    DistrictBound {
        id: "bengaluru_rural",
        north: 13.60,
        south: 13.20,
        east: 77.90,
        west: 77.20,
    },
    DistrictBound {
        id: "ramanagara",
        north: 12.95,
        south: 12.45,
        east: 77.45,
        west: 77.00,
    },
    DistrictBound {
        id: "mysuru",
        north: 12.60,
        south: 11.90,
        east: 77.05,
        west: 76.20,
    },
    DistrictBound {
        id: "mandya",
        north: 13.05,
        south: 12.20,
        east: 77.30,
        west: 76.45,
    },
    DistrictBound {
        id: "chamarajanagara",
        north: 12.20,
        south: 11.60,
        east: 77.80,
        west: 76.55,
    },
    DistrictBound {
        id: "kolar",
        north: 13.45,
        south: 12.75,
        east: 78.60,
        west: 77.90,
    },
    DistrictBound {
        id: "chikkaballapura",
        north: 13.90,
        south: 13.35,
        east: 78.40,
        west: 77.45,
    },
    DistrictBound {
        id: "tumakuru",
        north: 14.00,
        south: 12.95,
        east: 77.40,
        west: 76.40,
    },
    DistrictBound {
        id: "hassan",
        north: 13.35,
        south: 12.60,
        east: 76.45,
        west: 75.75,
    },
    DistrictBound {
        id: "dakshina_kannada",
        north: 13.20,
        south: 12.45,
        east: 75.70,
        west: 74.75,
    },
    DistrictBound {
        id: "udupi",
        north: 13.95,
        south: 13.20,
        east: 75.30,
        west: 74.60,
    },
    DistrictBound {
        id: "shivamogga",
        north: 14.45,
        south: 13.45,
        east: 75.90,
        west: 74.95,
    },
    DistrictBound {
        id: "chitradurga",
        north: 14.95,
        south: 13.95,
        east: 77.00,
        west: 76.00,
    },
    DistrictBound {
        id: "davangere",
        north: 14.75,
        south: 14.00,
        east: 76.30,
        west: 75.50,
    },
    DistrictBound {
        id: "ballari",
        north: 15.50,
        south: 14.70,
        east: 77.40,
        west: 76.20,
    },
    DistrictBound {
        id: "dharwad",
        north: 15.80,
        south: 15.10,
        east: 75.45,
        west: 74.70,
    },
    DistrictBound {
        id: "belagavi",
        north: 16.60,
        south: 15.40,
        east: 75.40,
        west: 74.10,
    },
    DistrictBound {
        id: "vijayapura",
        north: 17.30,
        south: 16.20,
        east: 76.50,
        west: 75.20,
    },
    DistrictBound {
        id: "kalaburagi",
        north: 17.60,
        south: 16.55,
        east: 77.60,
        west: 76.20,
    },
];

/// Coarser regional rectangles consulted only when no district matched.
/// Same first-match-wins rule.
pub const REGIONAL_BOUNDS: &[DistrictBound] = &[
    DistrictBound {
        id: "south_karnataka_general",
        north: 13.75,
        south: 11.60,
        east: 78.60,
        west: 75.70,
    },
    DistrictBound {
        id: "coastal_karnataka_general",
        north: 15.00,
        south: 12.40,
        east: 75.70,
        west: 74.00,
    },
    DistrictBound {
        id: "north_karnataka_general",
        north: 18.50,
        south: 13.75,
        east: 78.30,
        west: 74.00,
    },
    DistrictBound {
        id: "south_india_general",
        north: 20.00,
        south: 8.00,
        east: 85.00,
        west: 72.00,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let bound = DistrictBound {
            id: "t",
            north: 13.0,
            south: 12.0,
            east: 78.0,
            west: 77.0,
        };
        assert!(bound.contains(&Coordinate::new(13.0, 78.0)));
        assert!(bound.contains(&Coordinate::new(12.0, 77.0)));
        assert!(!bound.contains(&Coordinate::new(13.0001, 77.5)));
        assert!(!bound.contains(&Coordinate::new(12.5, 76.9999)));
    }

    #[test]
    fn bengaluru_test_fix_falls_in_bengaluru_urban() {
        let c = Coordinate::new(12.97, 77.59);
        let first = DISTRICT_BOUNDS.iter().find(|b| b.contains(&c)).unwrap();
        assert_eq!(first.id, "bengaluru_urban");
    }

    #[test]
    fn every_district_id_is_a_valid_slug() {
        for bound in DISTRICT_BOUNDS.iter().chain(REGIONAL_BOUNDS.iter()) {
            assert_eq!(crate::shared::slug::slugify(bound.id), bound.id);
        }
    }
}
