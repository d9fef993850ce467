use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("an unknown league was encountered: {0}")]
    UnknownLeague(String),
    #[error("an unknown confidence value was encountered: {0}")]
    UnknownConfidence(String),
    #[error("an unknown link count was encountered: {0}")]
    UnknownLinks(String),
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Crucible,
    #[default]
    Sanctum,
    Kalandra,
    Sentinel,
    Archnemesis,
    Scourge,
    Expedition,
    Ultimatum,
    Ritual,
    Heist,
}

impl League {
    pub const ALL: [League; 10] = [
        League::Crucible,
        League::Sanctum,
        League::Kalandra,
        League::Sentinel,
        League::Archnemesis,
        League::Scourge,
        League::Expedition,
        League::Ultimatum,
        League::Ritual,
        League::Heist,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            League::Crucible => "Crucible",
            League::Sanctum => "Sanctum",
            League::Kalandra => "Kalandra",
            League::Sentinel => "Sentinel",
            League::Archnemesis => "Archnemesis",
            League::Scourge => "Scourge",
            League::Expedition => "Expedition",
            League::Ultimatum => "Ultimatum",
            League::Ritual => "Ritual",
            League::Heist => "Heist",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|league| league.as_str() == s)
            .ok_or_else(|| ParseError::UnknownLeague(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        })
    }
}

impl FromStr for Confidence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Confidence::High),
            "Medium" => Ok(Confidence::Medium),
            "Low" => Ok(Confidence::Low),
            _ => Err(ParseError::UnknownConfidence(s.to_string())),
        }
    }
}

/// Socket link groups, only reported for armour and weapons.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemLinks {
    #[serde(rename = "1-4 links")]
    OneToFour,
    #[serde(rename = "5 links")]
    Five,
    #[serde(rename = "6 links")]
    Six,
}

impl ItemLinks {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemLinks::OneToFour => "1-4 links",
            ItemLinks::Five => "5 links",
            ItemLinks::Six => "6 links",
        }
    }
}

impl fmt::Display for ItemLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemLinks {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-4 links" => Ok(ItemLinks::OneToFour),
            "5 links" => Ok(ItemLinks::Five),
            "6 links" => Ok(ItemLinks::Six),
            _ => Err(ParseError::UnknownLinks(s.to_string())),
        }
    }
}

/// One daily price sample as returned by the economy backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub league: League,
    pub confidence: Confidence,
    #[serde(with = "daily_date")]
    pub date: NaiveDate,
    pub value: f64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_links: Option<ItemLinks>,
}

/// Accepts either a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|date| date.date_naive()))
}

mod daily_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_record_date(&raw).map_err(de::Error::custom)
    }
}
