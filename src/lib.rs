//! # Sightline
//!
//! Correlation engine estimating how much of a target object's apparent
//! recession velocity correlates with the aggregated luminosity of foreground
//! objects projected along its line of sight.
//!
//! For each target the engine queries an astronomical catalog for positions,
//! redshifts, velocities and magnitudes; filters candidate objects by angular
//! proximity and line-of-sight ordering; discounts the luminosity of objects
//! that are only partly in front of the target with a geometric weighting
//! factor; and aggregates the weighted luminosity totals against the targets'
//! recession velocities.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types — catalog records, sky positions, computed
//!   per-object and per-target results
//! - [`units`]: Redshift-to-distance and magnitude-to-luminosity conversions
//! - [`geometry`]: Angular separation and the line-of-sight weighting factor
//! - [`catalog`]: Lookup layer — the `CatalogSource` trait, a remote HTTP
//!   client, an in-memory backend, and the memoizing concurrency-bounded cache
//! - [`services`]: The proximity filter and the correlation driver
//! - [`io`]: CSV ingestion of object name lists and export of results
//!
//! ## Concurrency
//!
//! Catalog lookups for one proximity-filter invocation fan out through the
//! cache, bounded to 4 concurrent remote calls. The correlation driver runs
//! its targets sequentially; parallelism is confined to one target's
//! candidate batch at a time.

pub mod catalog;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod units;
