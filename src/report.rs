//! Report assembly and display formatting.
//!
//! Produces the final ranked text report from a [`DealAnalysis`] and the
//! display-name [`Lookups`]. Layout and glyphs match the operator's
//! long-standing report format, so diffs between runs stay readable.

use crate::aggregate::DealAnalysis;
use crate::extract::FlightRecord;
use crate::tables::Lookups;

const TOP_DEALS_PER_DESTINATION: usize = 3;
const TOP_DEALS_OVERALL: usize = 5;

/// Formats a price as whole pounds with thousands separators.
/// Prices are non-negative by the time they reach the report.
pub fn format_price(price: f64) -> String {
    let digits = (price.round() as u64).to_string();

    let mut out = String::from("£");
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Formats a duration in minutes as "4h 25m". Absent → "N/A".
pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{}h {}m", m / 60, m % 60),
        None => "N/A".to_string(),
    }
}

/// Formats a layover count: Direct / 1 stop / n stops. Absent → "N/A".
pub fn format_stops(stops: Option<u32>) -> String {
    match stops {
        None => "N/A".to_string(),
        Some(0) => "Direct".to_string(),
        Some(1) => "1 stop".to_string(),
        Some(n) => format!("{} stops", n),
    }
}

fn airline_name(record: &FlightRecord) -> &str {
    record.airline.as_deref().unwrap_or("N/A")
}

/// Assembles the complete report text.
pub fn build_report(analysis: &DealAnalysis, lookups: &Lookups, budget_ceiling: f64) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(100)));
    out.push_str("TOP 3 BEST VALUE TROPICAL FLIGHT DEALS - FAMILY OF 4\n");
    out.push_str(&format!("{}\n", "=".repeat(100)));

    // Destinations iterate in ascending code order; codes missing from
    // the lookup table are left out of this section.
    for group in analysis.destinations.values() {
        let Some((dest_name, dest_airport)) = lookups.destination(&group.destination) else {
            continue;
        };

        out.push_str(&format!(
            "\n🏝️  {} ({})\n",
            dest_name.to_uppercase(),
            dest_airport
        ));
        out.push_str(&format!("{}\n", "-".repeat(80)));

        for (i, deal) in group.top_deals(TOP_DEALS_PER_DESTINATION).iter().enumerate() {
            out.push_str(&format!(
                "\n{}. {} - {}\n",
                i + 1,
                format_price(deal.price),
                lookups.airport_name(&deal.origin_airport)
            ));
            out.push_str(&format!("   ✈️  Airline: {}\n", airline_name(deal)));
            out.push_str(&format!("   🛣️  Route: {}\n", format_stops(deal.stops)));
            out.push_str(&format!(
                "   ⏱️  Duration: {}\n",
                format_duration(deal.duration_minutes)
            ));
        }

        out.push_str(&format!(
            "\n   📊 Price Range: {} - {} (Avg: £{:.0})\n",
            format_price(group.stats.min),
            format_price(group.stats.max),
            group.stats.mean
        ));
        out.push_str(&format!(
            "   🔍 Searched: {} combinations\n",
            group.stats.count
        ));
    }

    out.push_str(&format!("\n{}\n", "=".repeat(100)));
    out.push_str("SUMMARY\n");
    out.push_str(&format!("{}\n", "=".repeat(100)));

    out.push_str("\n🏆 TOP 5 CHEAPEST TROPICAL DESTINATIONS:\n");
    for (i, deal) in analysis.cheapest_overall(TOP_DEALS_OVERALL).iter().enumerate() {
        let dest_name = lookups
            .destination(&deal.destination)
            .map(|(name, _)| name)
            .unwrap_or(deal.destination.as_str());

        out.push_str(&format!(
            "{}. {} - {} from {}\n",
            i + 1,
            format_price(deal.price),
            dest_name,
            lookups.airport_name(&deal.origin_airport)
        ));
        out.push_str(&format!(
            "    {} • {} • {}\n",
            airline_name(deal),
            format_stops(deal.stops),
            format_duration(deal.duration_minutes)
        ));
    }

    out.push_str("\n📍 BEST PRICES BY DEPARTURE AIRPORT:\n");
    for group in analysis.airports.values() {
        out.push_str(&format!(
            "   {}: {} - {} (Avg: £{:.0})\n",
            lookups.airport_name(&group.airport),
            format_price(group.stats.min),
            format_price(group.stats.max),
            group.stats.mean
        ));
    }

    out.push_str(&format!(
        "\n💰 Family of 4 flights under £{:.0}: {}/{}\n",
        budget_ceiling,
        analysis.below_budget(budget_ceiling),
        analysis.total_records
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DealAnalysis;
    use crate::tables::{BUDGET_CEILING, Lookups};

    fn record(destination: &str, origin: &str, price: f64) -> FlightRecord {
        FlightRecord {
            destination: destination.to_string(),
            origin_airport: origin.to_string(),
            price,
            currency: Some("GBP".to_string()),
            airline: Some("easyJet".to_string()),
            stops: Some(0),
            duration_minutes: Some(265),
            source_name: format!("{}-{}.json", destination, origin),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(900.0), "£900");
        assert_eq!(format_price(1265.0), "£1,265");
        assert_eq!(format_price(1234567.0), "£1,234,567");
        assert_eq!(format_price(1499.6), "£1,500");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some(265)), "4h 25m");
        assert_eq!(format_duration(Some(60)), "1h 0m");
        assert_eq!(format_duration(Some(45)), "0h 45m");
        assert_eq!(format_duration(None), "N/A");
    }

    #[test]
    fn test_format_stops() {
        assert_eq!(format_stops(Some(0)), "Direct");
        assert_eq!(format_stops(Some(1)), "1 stop");
        assert_eq!(format_stops(Some(2)), "2 stops");
        assert_eq!(format_stops(None), "N/A");
    }

    #[test]
    fn test_report_orders_top_deals_by_price() {
        let analysis = DealAnalysis::from_records(vec![
            record("tenerife", "lgw", 1500.0),
            record("tenerife", "lgw", 1800.0),
            record("tenerife", "lgw", 1200.0),
        ]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        assert!(report.contains("TENERIFE (TFS)"));
        assert!(report.contains("1. £1,200"));
        assert!(report.contains("2. £1,500"));
        assert!(report.contains("3. £1,800"));
        assert!(report.contains("Price Range: £1,200 - £1,800 (Avg: £1500)"));
        assert!(report.contains("Searched: 3 combinations"));
    }

    #[test]
    fn test_report_omits_unknown_destination_section() {
        let analysis = DealAnalysis::from_records(vec![
            record("atlantis", "lgw", 999.0),
            record("malta", "lgw", 1100.0),
        ]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        // No per-destination section for the unknown code, but the record
        // still shows in the global summary under its raw code.
        assert!(!report.contains("ATLANTIS"));
        assert!(report.contains("MALTA (MLA)"));
        assert!(report.contains("£999 - atlantis from London Gatwick (LGW)"));
    }

    #[test]
    fn test_report_absent_fields_show_na() {
        let mut bare = record("crete", "lgw", 800.0);
        bare.airline = None;
        bare.stops = None;
        bare.duration_minutes = None;

        let analysis = DealAnalysis::from_records(vec![bare]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        assert!(report.contains("Airline: N/A"));
        assert!(report.contains("Route: N/A"));
        assert!(report.contains("Duration: N/A"));
    }

    #[test]
    fn test_report_budget_tally() {
        let analysis = DealAnalysis::from_records(vec![
            record("malta", "lgw", 1500.0),
            record("malta", "man", 2400.0),
        ]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        assert!(report.contains("under £2000: 1/2"));
    }

    #[test]
    fn test_report_empty_dataset() {
        let analysis = DealAnalysis::from_records(vec![]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        assert!(report.contains("SUMMARY"));
        assert!(report.contains("under £2000: 0/0"));
        assert!(!report.contains("🏝️"));
    }

    #[test]
    fn test_destination_sections_in_ascending_code_order() {
        let analysis = DealAnalysis::from_records(vec![
            record("tenerife", "lgw", 1500.0),
            record("athens", "lgw", 1300.0),
            record("malta", "man", 1400.0),
        ]);
        let report = build_report(&analysis, &Lookups::builtin(), BUDGET_CEILING);

        let athens = report.find("ATHENS").unwrap();
        let malta = report.find("MALTA").unwrap();
        let tenerife = report.find("TENERIFE").unwrap();
        assert!(athens < malta && malta < tenerife);
    }
}
