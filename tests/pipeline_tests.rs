//! End-to-end pipeline tests over the in-memory catalog backend.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use sightline::catalog::{CatalogCache, MemoryCatalog};
use sightline::io::{read_names, write_results};
use sightline::models::{CatalogRecord, SkyPosition};
use sightline::services::{correlate, ProximityParams};

fn record(name: &str, ra: f64, dec: f64, redshift: f64, mag: &str, v: f64) -> CatalogRecord {
    CatalogRecord {
        name: name.to_string(),
        position: SkyPosition::new(ra, dec),
        redshift,
        velocity_km_s: v,
        apparent_magnitude: Some(mag.to_string()),
    }
}

#[tokio::test]
async fn test_names_csv_to_results_csv() {
    // Name list holds targets and candidates alike; the target itself is in
    // the candidate list and gets excluded by the strict distance ordering.
    let mut names_file = NamedTempFile::new().expect("temp file");
    write!(
        names_file,
        "Name\nTARGET\nNGC 1\nNGC 2\nMISSING OBJECT\n"
    )
    .expect("write name list");

    let mut catalog = MemoryCatalog::new();
    catalog.insert(record("TARGET", 10.0, 0.0, 0.02, "12.0", 6000.0));
    catalog.insert(record("NGC 1", 10.05, 0.0, 0.01, "13.0", 3000.0));
    // Behind the target; never counts.
    catalog.insert(record("NGC 2", 10.02, 0.0, 0.05, "13.0", 15000.0));
    let cache = CatalogCache::new(Arc::new(catalog));

    let names = read_names(names_file.path()).unwrap();
    assert_eq!(names.len(), 4);

    let params = ProximityParams::new(1.0);
    let results = correlate(&cache, &names, &names, &params).await;

    // TARGET keeps its one close object; NGC 2 sees TARGET and NGC 1 as
    // foreground objects of its own; NGC 1 has nothing in front of it and
    // MISSING OBJECT fails lookup. Both of the latter are dropped.
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].target_name, "TARGET");
    assert_eq!(results[0].close_object_count, 1);
    assert_eq!(results[0].target_velocity_km_s, 6000.0);
    assert_eq!(results[1].target_name, "NGC 2");
    assert_eq!(results[1].close_object_count, 2);

    let out_file = NamedTempFile::new().expect("temp file");
    write_results(out_file.path(), &results).unwrap();

    let written = std::fs::read_to_string(out_file.path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "total_weighted_luminosity,target_velocity_km_s");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",6000"));
    assert!(lines[2].ends_with(",15000"));
}

#[tokio::test]
async fn test_run_with_no_retained_targets_yields_empty_dataset() {
    let mut catalog = MemoryCatalog::new();
    // Two objects too far apart on the sky to ever pass the angular filter.
    catalog.insert(record("A", 10.0, 0.0, 0.02, "12.0", 6000.0));
    catalog.insert(record("B", 250.0, 40.0, 0.01, "13.0", 3000.0));
    let cache = CatalogCache::new(Arc::new(catalog));

    let names = vec!["A".to_string(), "B".to_string()];
    let params = ProximityParams::new(1.0);
    let results = correlate(&cache, &names, &names, &params).await;

    assert!(results.is_empty());
}
