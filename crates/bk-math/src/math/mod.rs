//! Core math modules.

pub mod coerce;
pub mod dispersion;
pub mod mean;
pub mod precision;
