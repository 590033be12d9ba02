//! Code-embedded lookup tables for the report.

use std::collections::HashMap;

/// Family-of-4 budget ceiling in pounds, used for the affordability tally.
pub const BUDGET_CEILING: f64 = 2000.0;

/// Destination code → (display name, destination airport code).
static DESTINATIONS: &[(&str, (&str, &str))] = &[
    ("tenerife", ("Tenerife", "TFS")),
    ("gran-canaria", ("Gran Canaria", "LPA")),
    ("lanzarote", ("Lanzarote", "ACE")),
    ("antalya", ("Antalya", "AYT")),
    ("istanbul", ("Istanbul", "IST")),
    ("cyprus", ("Cyprus", "LCA")),
    ("athens", ("Athens", "ATH")),
    ("crete", ("Crete", "HER")),
    ("malta", ("Malta", "MLA")),
    ("casablanca", ("Casablanca", "CMN")),
    ("hurghada", ("Hurghada", "HRG")),
];

/// Origin airport code → display name.
static AIRPORTS: &[(&str, &str)] = &[
    ("lgw", "London Gatwick (LGW)"),
    ("lhr", "London Heathrow (LHR)"),
    ("stn", "London Stansted (STN)"),
    ("man", "Manchester (MAN)"),
];

/// Read-only display-name tables handed to the report builder.
pub struct Lookups {
    destinations: HashMap<&'static str, (&'static str, &'static str)>,
    airports: HashMap<&'static str, &'static str>,
}

impl Lookups {
    /// The built-in tables for the currently tracked routes.
    pub fn builtin() -> Self {
        Lookups {
            destinations: DESTINATIONS.iter().copied().collect(),
            airports: AIRPORTS.iter().copied().collect(),
        }
    }

    /// Display name and destination airport for a known destination code.
    /// Unknown codes return `None` and are omitted from the
    /// per-destination report section.
    pub fn destination(&self, code: &str) -> Option<(&'static str, &'static str)> {
        self.destinations.get(code).copied()
    }

    /// Display name for an origin airport code, falling back to the
    /// uppercased code when unknown.
    pub fn airport_name(&self, code: &str) -> String {
        match self.airports.get(code) {
            Some(name) => (*name).to_string(),
            None => code.to_uppercase(),
        }
    }
}
