//! Benchkit numeric aggregates.
//!
//! Every aggregate here is a total function: empty input, non-numeric
//! samples, zeros and negatives all map to a defined value (`0`, `NaN`, or
//! the input unchanged) instead of an error.

pub mod math;

pub use math::coerce::*;
pub use math::dispersion::*;
pub use math::mean::*;
pub use math::precision::*;
