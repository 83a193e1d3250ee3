//! Service layer: the proximity filter and the correlation driver.
//!
//! Services orchestrate catalog fetches through the cache and implement the
//! filtering and aggregation logic on top of the unit converters and the
//! geometry engine.

pub mod correlation;
pub mod proximity;


pub use correlation::{correlate, SELF_LUMINOSITY_FRACTION};
pub use proximity::{find_close_objects, ProximityParams};
