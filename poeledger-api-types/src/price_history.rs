use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing history for one item, served from `/history`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    pub item_name: String,
    pub league: String,
    pub events: Vec<PriceHistoryEvent>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryEvent {
    pub listed_currency: ListingCurrency,
    pub listed_price: f64,
    pub listed_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum ListingCurrency {
    Chaos,
    Divine,
    Exalt,
    #[default]
    Unknown,
}

impl From<&str> for ListingCurrency {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "chaos" => ListingCurrency::Chaos,
            "divine" => ListingCurrency::Divine,
            "exa" | "exalt" | "exalted" => ListingCurrency::Exalt,
            _ => ListingCurrency::Unknown,
        }
    }
}

impl From<String> for ListingCurrency {
    fn from(value: String) -> Self {
        ListingCurrency::from(value.as_str())
    }
}
