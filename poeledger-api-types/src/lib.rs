mod price_history;
mod price_record;

pub mod result;
pub mod search;

pub use price_history::{ListingCurrency, PriceHistory, PriceHistoryEvent};
pub use price_record::{parse_record_date, Confidence, ItemLinks, League, ParseError, PriceRecord};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEM: &str = "Divine Orb";
pub const DEFAULT_LEAGUE: &str = "Sanctum";

/// Everything the price page needs from the backend for a single render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePageData {
    pub current_item: String,
    pub current_league: String,
    pub records: Vec<PriceRecord>,
    pub filters: Vec<String>,
    pub leagues: Vec<String>,
}

impl PricePageData {
    /// The page shown when there is no backend to ask.
    pub fn empty(current_item: impl Into<String>, current_league: impl Into<String>) -> Self {
        Self {
            current_item: current_item.into(),
            current_league: current_league.into(),
            ..Default::default()
        }
    }
}
