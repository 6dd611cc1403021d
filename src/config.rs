//! Application-level configuration constants.

// Remote endpoints supplying the demo data
pub const RANGE_VALUES_URL: &str = "http://demo0427535.mockable.io/range-values";
pub const FIXED_VALUES_URL: &str = "https://demo7130955.mockable.io/fixed-values";

// Step applied to both exercises
pub const DEFAULT_STEP: f64 = 1.0;

// Bounds for the fixed-values exercise; the endpoint only supplies the
// value set itself.
pub const FIXED_RANGE_MIN: f64 = 1.99;
pub const FIXED_RANGE_MAX: f64 = 70.99;
