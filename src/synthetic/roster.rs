//! The fixed company roster served in synthetic mode.

pub(crate) struct RosterEntry {
    pub(crate) name: &'static str,
    pub(crate) ticker: &'static str,
    pub(crate) industry: &'static str,
    pub(crate) headquarters: &'static str,
    pub(crate) description: &'static str,
}

impl RosterEntry {
    /// `https://logo.clearbit.com/{first word of name, lowercased}.com`
    pub(crate) fn logo_url(&self) -> String {
        logo_url_for(self.name)
    }
}

pub(crate) fn logo_url_for(name: &str) -> String {
    let first = name
        .split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase();
    format!("https://logo.clearbit.com/{first}.com")
}

pub(crate) const ROSTER: &[RosterEntry] = &[
    RosterEntry {
        name: "Apple Inc.",
        ticker: "AAPL",
        industry: "Technology",
        headquarters: "Cupertino, United States",
        description: "Designs consumer electronics, software and services with a carbon-neutral supply chain target for 2030.",
    },
    RosterEntry {
        name: "Microsoft Corporation",
        ticker: "MSFT",
        industry: "Technology",
        headquarters: "Redmond, United States",
        description: "Cloud, productivity software and devices; committed to being carbon negative by 2030.",
    },
    RosterEntry {
        name: "Tesla Inc.",
        ticker: "TSLA",
        industry: "Automotive",
        headquarters: "Austin, United States",
        description: "Electric vehicles, battery storage and solar generation.",
    },
    RosterEntry {
        name: "Patagonia",
        ticker: "Private",
        industry: "Apparel",
        headquarters: "Ventura, United States",
        description: "Outdoor apparel company owned by a trust dedicated to fighting the environmental crisis.",
    },
    RosterEntry {
        name: "Unilever PLC",
        ticker: "UL",
        industry: "Consumer Goods",
        headquarters: "London, United Kingdom",
        description: "Food, beauty and home care brands sold in more than 190 countries.",
    },
    RosterEntry {
        name: "NextEra Energy",
        ticker: "NEE",
        industry: "Utilities",
        headquarters: "Juno Beach, United States",
        description: "Electric utility and one of the largest generators of wind and solar energy.",
    },
    RosterEntry {
        name: "Salesforce Inc.",
        ticker: "CRM",
        industry: "Technology",
        headquarters: "San Francisco, United States",
        description: "Customer relationship management software delivered from the cloud.",
    },
    RosterEntry {
        name: "Chipotle Mexican Grill",
        ticker: "CMG",
        industry: "Restaurants",
        headquarters: "Newport Beach, United States",
        description: "Fast-casual restaurant chain sourcing responsibly raised ingredients.",
    },
];

/// Countries covered by synthetic supply-chain exposure.
pub(crate) const SUPPLY_CHAIN_COUNTRIES: &[&str] = &[
    "United States",
    "China",
    "Vietnam",
    "Mexico",
    "Germany",
    "India",
    "Brazil",
];

/// Filters offered by the synthetic discovery bundle (after "All").
pub(crate) const DISCOVERY_FILTERS: &[&str] = &[
    "Technology",
    "Energy",
    "Consumer",
    "Industrials",
    "Utilities",
];

/// Sectors backing synthetic watchlist pipelines.
pub(crate) const PIPELINE_SECTORS: &[&str] = &[
    "Technology",
    "Energy",
    "Utilities",
    "Consumer Defensive",
    "Industrials",
];

pub(crate) fn find(ticker: &str) -> Option<&'static RosterEntry> {
    let t = ticker.trim();
    ROSTER.iter().find(|c| c.ticker.eq_ignore_ascii_case(t))
}
