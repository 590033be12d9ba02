//! JSON content model for captured snapshot files.
//!
//! Every level of the tree is optional: a capture may have recorded no
//! best price at all, a best price with no result details, or a result
//! with any subset of its fields. Each field is modeled as its own
//! `Option` so downstream extraction stays per-field, not all-or-nothing.

use anyhow::Result;
use serde::Deserialize;

/// One parsed snapshot file.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "bestPrice")]
    pub best_price: Option<BestPrice>,
}

/// The lowest fare found at capture time, with its itinerary details.
#[derive(Debug, Default, Deserialize)]
pub struct BestPrice {
    pub price: Option<f64>,
    pub result: Option<FareResult>,
}

/// Itinerary metadata attached to a best price.
#[derive(Debug, Default, Deserialize)]
pub struct FareResult {
    pub airline: Option<String>,
    pub stops: Option<u32>,
    pub duration: Option<u32>,
    pub currency: Option<String>,
}

/// Parses a snapshot file's JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid JSON object for a
/// [`Snapshot`].
pub fn parse_snapshot(text: &str) -> Result<Snapshot> {
    Ok(serde_json::from_str(text)?)
}
