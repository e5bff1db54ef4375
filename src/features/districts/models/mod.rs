mod bounds;

pub use bounds::{DistrictBound, DISTRICT_BOUNDS, REGIONAL_BOUNDS, SIMULATOR_BOUND, SIMULATOR_DISTRICT};
