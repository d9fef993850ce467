use poeledger_api_types::{PriceHistoryEvent, PriceRecord};
use serde::{Deserialize, Serialize};

pub const BORDER_COLOR: &str = "rgb(255, 99, 132)";
pub const BACKGROUND_COLOR: &str = "rgba(255, 99, 132, 0.5)";

/// Anything that can sit on the price line: an x label and a y value.
pub trait ChartPoint {
    fn label(&self) -> String;
    fn value(&self) -> f64;
}

impl ChartPoint for PriceRecord {
    fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl ChartPoint for PriceHistoryEvent {
    fn label(&self) -> String {
        self.listed_date.format("%Y-%m-%d %H:%M").to_string()
    }

    fn value(&self) -> f64 {
        self.listed_price
    }
}

/// Line chart input in the shape chart.js expects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

impl ChartData {
    /// The single dataset every chart carries.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.datasets.first()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Projects points 1:1 into labels and values. Input order is kept as is.
pub fn to_chart_data<'a, P, I>(label: &str, points: I) -> ChartData
where
    P: ChartPoint + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let (labels, data): (Vec<_>, Vec<_>) = points
        .into_iter()
        .map(|point| (point.label(), point.value()))
        .unzip();
    ChartData {
        labels,
        datasets: vec![Dataset {
            label: label.to_string(),
            data,
            border_color: BORDER_COLOR.to_string(),
            background_color: BACKGROUND_COLOR.to_string(),
        }],
    }
}

pub fn chart_title(league: &str, item: &str) -> String {
    format!("{league} - {item} Prices")
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, TimeZone, Utc};
    use poeledger_api_types::{Confidence, League, ListingCurrency};

    use super::*;

    fn record(date: (i32, u32, u32), value: f64) -> PriceRecord {
        PriceRecord {
            league: League::Sanctum,
            confidence: Confidence::High,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            value,
            name: "Divine Orb".to_string(),
            item_id: None,
            item_type: None,
            base_type: None,
            item_variant: None,
            item_links: None,
        }
    }

    #[test]
    fn single_record_projection() {
        let record: PriceRecord = serde_json::from_str(
            r#"{"name":"Divine Orb","value":150,"date":"2023-01-01","league":"Sanctum","confidence":"High"}"#,
        )
        .unwrap();
        let chart = to_chart_data("Divine Orb", [&record]);
        assert_eq!(chart.labels, vec!["2023-01-01"]);
        assert_eq!(chart.dataset().unwrap().data, vec![150.0]);
    }

    #[test]
    fn keeps_input_order() {
        // deliberately out of date order
        let records = vec![
            record((2023, 1, 3), 3.0),
            record((2023, 1, 1), 1.0),
            record((2023, 1, 2), 2.0),
            record((2023, 1, 2), 2.5),
        ];
        let chart = to_chart_data("Divine Orb", &records);
        let dataset = chart.dataset().unwrap();
        assert_eq!(chart.labels.len(), records.len());
        assert_eq!(dataset.data.len(), records.len());
        assert_eq!(
            chart.labels,
            vec!["2023-01-03", "2023-01-01", "2023-01-02", "2023-01-02"]
        );
        assert_eq!(dataset.data, vec![3.0, 1.0, 2.0, 2.5]);
    }

    #[test]
    fn empty_input_keeps_dataset() {
        let records: Vec<PriceRecord> = vec![];
        let chart = to_chart_data("Divine Orb", &records);
        assert!(chart.is_empty());
        assert_eq!(chart.datasets.len(), 1);
        let dataset = chart.dataset().unwrap();
        assert!(dataset.data.is_empty());
        assert_eq!(dataset.label, "Divine Orb");
        assert_eq!(dataset.border_color, BORDER_COLOR);
    }

    #[test]
    fn serializes_for_chart_js() {
        let chart = to_chart_data("Chaos Orb", &[record((2023, 2, 1), 1.0)]);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["labels"][0], "2023-02-01");
        assert_eq!(json["datasets"][0]["label"], "Chaos Orb");
        assert_eq!(json["datasets"][0]["borderColor"], "rgb(255, 99, 132)");
        assert_eq!(json["datasets"][0]["backgroundColor"], "rgba(255, 99, 132, 0.5)");
    }

    #[test]
    fn history_events() {
        let events = vec![PriceHistoryEvent {
            listed_currency: ListingCurrency::Divine,
            listed_price: 24.0,
            listed_date: Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap(),
        }];
        let chart = to_chart_data("Headhunter", &events);
        assert_eq!(chart.labels, vec!["2024-01-02 10:30"]);
        assert_eq!(chart.dataset().unwrap().data, vec![24.0]);
    }

    #[test]
    fn title() {
        assert_eq!(chart_title("Sanctum", "Divine Orb"), "Sanctum - Divine Orb Prices");
    }
}
