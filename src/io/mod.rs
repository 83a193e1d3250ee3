//! CSV ingestion of object name lists and export of aggregate results.

pub mod names;
pub mod results;

#[cfg(test)]
mod names_tests;

pub use names::read_names;
pub use results::write_results;
