//! Mandi prices and search

/// Spoken before a voice search
pub const VOICE_SEARCH_PROMPT: &str = "Speak the crop name you want to search for";

/// Shown when the search matches nothing
pub const NO_RESULTS: &str = "No crops found matching your search.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    fn spoken(&self) -> &'static str {
        match self {
            Trend::Up => "increased",
            Trend::Down => "decreased",
            Trend::Stable => "remained stable",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketPrice {
    pub crop: &'static str,
    pub local_name: &'static str,
    /// Rupees
    pub current_price: u32,
    pub previous_price: u32,
    pub unit: &'static str,
    pub market: &'static str,
    pub last_updated: &'static str,
    pub trend: Trend,
}

impl MarketPrice {
    /// Absolute change since the previous price
    pub fn change(&self) -> u32 {
        self.current_price.abs_diff(self.previous_price)
    }

    /// Change as shown on the card
    pub fn change_label(&self) -> String {
        match self.trend {
            Trend::Up => format!("+{}", self.change()),
            Trend::Down => format!("-{}", self.change()),
            Trend::Stable => "No change".to_string(),
        }
    }

    /// Whether `term` matches the English name (any case) or the local name
    pub fn matches(&self, term: &str) -> bool {
        self.crop.to_lowercase().contains(&term.to_lowercase()) || self.local_name.contains(term)
    }

    pub fn spoken_details(&self) -> String {
        format!(
            "{} current price is {} rupees {} at {}. Price has {} by {} rupees. Last updated {}.",
            self.crop,
            self.current_price,
            self.unit,
            self.market,
            self.trend.spoken(),
            self.change(),
            self.last_updated
        )
    }
}

/// Prices matching a search term; an empty term matches everything
pub fn filter_prices<'a>(prices: &'a [MarketPrice], term: &str) -> Vec<&'a MarketPrice> {
    let term = term.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    prices.iter().filter(|p| p.matches(term)).collect()
}

pub fn prices() -> Vec<MarketPrice> {
    vec![
        entry("Rice", "వరిధాన్యం", 2850, 2780, "Warangal Mandi", "2 hours ago", Trend::Up),
        entry("Cotton", "పత్తి", 6200, 6350, "Adilabad Market", "1 hour ago", Trend::Down),
        entry("Maize", "మొక్కజొన్న", 1980, 1980, "Nizamabad Mandi", "30 minutes ago", Trend::Stable),
        entry("Groundnut", "వేరుశెనగ", 5400, 5250, "Karimnagar Market", "45 minutes ago", Trend::Up),
        entry("Turmeric", "పసుపు", 8500, 8200, "Nizamabad Turmeric Market", "1 hour ago", Trend::Up),
        entry("Chilli", "మిర్చి", 12000, 12500, "Khammam Market", "2 hours ago", Trend::Down),
    ]
}

fn entry(
    crop: &'static str,
    local_name: &'static str,
    current_price: u32,
    previous_price: u32,
    market: &'static str,
    last_updated: &'static str,
    trend: Trend,
) -> MarketPrice {
    MarketPrice {
        crop,
        local_name,
        current_price,
        previous_price,
        unit: "per quintal",
        market,
        last_updated,
        trend,
    }
}
