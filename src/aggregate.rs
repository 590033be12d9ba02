//! Grouping, ranking, and summary statistics over flight records.

use crate::extract::FlightRecord;
use std::collections::BTreeMap;

/// Min/max/mean of price over a group, computed over all members.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

impl PriceStats {
    fn from_prices(prices: &[f64]) -> Self {
        let count = prices.len();
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        PriceStats {
            min,
            max,
            mean: mean(prices),
            count,
        }
    }
}

/// All valid records for one destination, sorted ascending by price.
#[derive(Debug)]
pub struct DestinationGroup {
    pub destination: String,
    pub records: Vec<FlightRecord>,
    pub stats: PriceStats,
}

impl DestinationGroup {
    /// The N cheapest deals for this destination.
    pub fn top_deals(&self, n: usize) -> &[FlightRecord] {
        &self.records[..self.records.len().min(n)]
    }
}

/// Price summary for one origin airport across all its records.
#[derive(Debug)]
pub struct AirportGroup {
    pub airport: String,
    pub stats: PriceStats,
}

/// The full aggregation of one run's valid records.
///
/// Maps are ordered by code so report iteration walks destinations and
/// airports in ascending lexicographic order.
#[derive(Debug)]
pub struct DealAnalysis {
    pub destinations: BTreeMap<String, DestinationGroup>,
    pub airports: BTreeMap<String, AirportGroup>,
    /// All records sorted ascending by price, stable on ties.
    pub by_price: Vec<FlightRecord>,
    pub total_records: usize,
}

impl DealAnalysis {
    /// Groups and ranks the given records. Records arrive in input order;
    /// all sorts are stable, so equal prices keep that order.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let total_records = records.len();

        let mut by_destination: BTreeMap<String, Vec<FlightRecord>> = BTreeMap::new();
        let mut airport_prices: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for record in &records {
            by_destination
                .entry(record.destination.clone())
                .or_default()
                .push(record.clone());
            airport_prices
                .entry(record.origin_airport.clone())
                .or_default()
                .push(record.price);
        }

        let destinations = by_destination
            .into_iter()
            .map(|(destination, mut members)| {
                members.sort_by(|a, b| a.price.total_cmp(&b.price));
                let prices: Vec<f64> = members.iter().map(|r| r.price).collect();
                let group = DestinationGroup {
                    destination: destination.clone(),
                    stats: PriceStats::from_prices(&prices),
                    records: members,
                };
                (destination, group)
            })
            .collect();

        let airports = airport_prices
            .into_iter()
            .map(|(airport, prices)| {
                let group = AirportGroup {
                    airport: airport.clone(),
                    stats: PriceStats::from_prices(&prices),
                };
                (airport, group)
            })
            .collect();

        let mut by_price = records;
        by_price.sort_by(|a, b| a.price.total_cmp(&b.price));

        DealAnalysis {
            destinations,
            airports,
            by_price,
            total_records,
        }
    }

    /// The N cheapest records across all destinations combined.
    pub fn cheapest_overall(&self, n: usize) -> &[FlightRecord] {
        &self.by_price[..self.by_price.len().min(n)]
    }

    /// How many records fall strictly below the given price ceiling.
    pub fn below_budget(&self, ceiling: f64) -> usize {
        self.by_price.iter().filter(|r| r.price < ceiling).count()
    }
}

/// Arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
