//! Client for the PoE Ledger economy backend.
//!
//! The backend serves daily price samples, the list of priced item names and
//! the list of leagues it has data for. Nothing here caches; every call is a
//! fresh request.

use log::info;
use poeledger_api_types::{PriceHistory, PricePageData, PriceRecord};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Backend returned {status} for {url}")]
    BadStatus { url: Url, status: StatusCode },
}

/// Where the backend lives. A missing host turns every page into an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub host: Option<Url>,
    pub user_agent: String,
}

impl BackendConfig {
    pub fn new(host: Option<&str>, user_agent: impl ToString) -> Result<Self, Error> {
        let host = host
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(|host| {
                // join() replaces the last path segment unless the base ends in a slash
                if host.ends_with('/') {
                    Url::parse(host)
                } else {
                    Url::parse(&format!("{host}/"))
                }
            })
            .transpose()?;
        Ok(Self {
            host,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn unconfigured() -> Self {
        Self {
            host: None,
            user_agent: "poeledger".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EconomyClient {
    client: Client,
    base_url: Url,
}

impl EconomyClient {
    /// Returns `None` when the config has no backend host.
    pub fn new(config: &BackendConfig) -> Result<Option<Self>, Error> {
        let Some(base_url) = config.host.clone() else {
            return Ok(None);
        };
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Some(EconomyClient { client, base_url }))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_prices(&self, name: &str, league: &str) -> Result<Vec<PriceRecord>, Error> {
        let url = self.endpoint("prices", &[("name", name), ("league", league)])?;
        self.get_json(url).await
    }

    pub async fn get_history(&self, item: &str) -> Result<PriceHistory, Error> {
        let url = self.endpoint("history", &[("item", item)])?;
        self.get_json(url).await
    }

    pub async fn get_filters(&self) -> Result<Vec<String>, Error> {
        let url = self.endpoint("filters", &[])?;
        self.get_json(url).await
    }

    pub async fn get_leagues(&self) -> Result<Vec<String>, Error> {
        let url = self.endpoint("leagues", &[])?;
        self.get_json(url).await
    }

    /// Prices, item names and leagues in one go. The three requests run concurrently.
    pub async fn get_price_page(&self, name: &str, league: &str) -> Result<PricePageData, Error> {
        let (records, filters, leagues) = futures::future::try_join3(
            self.get_prices(name, league),
            self.get_filters(),
            self.get_leagues(),
        )
        .await?;
        Ok(PricePageData {
            current_item: name.to_string(),
            current_league: league.to_string(),
            records,
            filters,
            leagues,
        })
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        info!("requesting economy data: {url}");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus { url, status });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
