//! Normalization of decoded identity + parsed content into flight records.

use crate::snapshot::Snapshot;

/// One normalized flight-price observation, ready for aggregation.
///
/// `price` is non-optional: a snapshot without a usable price never
/// becomes a record, so no downstream consumer has to re-check it.
/// The itinerary fields stay independently optional and render as
/// "N/A" in the report when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub destination: String,
    pub origin_airport: String,
    pub price: f64,
    pub currency: Option<String>,
    pub airline: Option<String>,
    pub stops: Option<u32>,
    pub duration_minutes: Option<u32>,
    /// Originating filename, for diagnostics only.
    pub source_name: String,
}

/// Builds a [`FlightRecord`] from a decoded identity and parsed content.
///
/// Returns `None` when the identity could not be decoded, when the
/// snapshot has no best-price substructure, or when the best price
/// carries no price value. Each itinerary field is pulled independently;
/// one being absent never discards the others.
pub fn extract_record(
    identity: Option<(String, String)>,
    snapshot: Snapshot,
    source_name: &str,
) -> Option<FlightRecord> {
    let (destination, origin_airport) = identity?;
    let best = snapshot.best_price?;
    let price = best.price?;
    let result = best.result.unwrap_or_default();

    Some(FlightRecord {
        destination,
        origin_airport,
        price,
        currency: result.currency,
        airline: result.airline,
        stops: result.stops,
        duration_minutes: result.duration,
        source_name: source_name.to_string(),
    })
}
