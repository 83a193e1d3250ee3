//! Domain models for catalog objects and correlation results.

pub mod catalog;
pub mod results;

pub use catalog::*;
pub use results::*;
