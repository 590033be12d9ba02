//! Directory scan over captured snapshot files.
//!
//! Each file is handled independently: an unreadable or malformed file is
//! logged and skipped, never aborting the batch. Only a failure to list
//! the directory itself propagates.

use crate::decode::{decode_label, label_from_filename};
use crate::extract::{FlightRecord, extract_record};
use crate::snapshot::parse_snapshot;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of one directory scan.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Records with a decoded identity and a price, in directory order.
    pub records: Vec<FlightRecord>,
    /// Files matching the naming convention.
    pub files_scanned: usize,
    /// Matching files that failed to read or parse.
    pub files_errored: usize,
    /// Matching files that yielded no record (undecodable label or no price).
    pub files_without_record: usize,
}

/// Reads every snapshot file under `data_dir` and extracts its record.
///
/// # Errors
///
/// Returns an error only if `data_dir` itself cannot be listed.
pub fn scan_directory(data_dir: &Path) -> Result<ScanResult> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("failed to list data directory {}", data_dir.display()))?;

    let mut scan = ScanResult::default();

    let mut filenames: Vec<String> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => entry.file_name().to_str().map(str::to_string),
            Err(e) => {
                warn!(error = %e, "Unreadable directory entry, skipping");
                None
            }
        })
        .filter(|name| label_from_filename(name).is_some())
        .collect();

    // read_dir order is platform-dependent; fix it so tie-breaking by
    // input order is reproducible.
    filenames.sort();

    for filename in filenames {
        scan.files_scanned += 1;

        let identity = label_from_filename(&filename).and_then(decode_label);

        let text = match fs::read_to_string(data_dir.join(&filename)) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %filename, error = %e, "Failed to read snapshot file, skipping");
                scan.files_errored += 1;
                continue;
            }
        };

        let snapshot = match parse_snapshot(&text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(file = %filename, error = %e, "Malformed snapshot file, skipping");
                scan.files_errored += 1;
                continue;
            }
        };

        match extract_record(identity, snapshot, &filename) {
            Some(record) => {
                debug!(
                    file = %filename,
                    destination = %record.destination,
                    origin = %record.origin_airport,
                    price = record.price,
                    "Snapshot record extracted"
                );
                scan.records.push(record);
            }
            None => {
                debug!(file = %filename, "Snapshot yielded no usable record");
                scan.files_without_record += 1;
            }
        }
    }

    Ok(scan)
}
