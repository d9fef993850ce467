use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use economy_api::EconomyClient;
use poeledger_api_types::{PricePageData, DEFAULT_ITEM, DEFAULT_LEAGUE};
use poeledger_charts::{chart_title, render_chart, to_chart_data, ChartData};
use serde::Deserialize;

use super::{
    error::{ApiError, WebError},
    item_search_form::RawItemSearchForm,
    item_search_form::FormErrors,
    templates::{
        page::RenderPage,
        pages::{
            history_page::HistoryPage,
            price_page::{PricesPage, CHART_SIZE},
        },
    },
};
use crate::utils::empty_string_as_none;

const NO_BACKEND: &str = "No economy backend is configured, so there are no prices to show.";

#[derive(Deserialize, Debug, Default)]
pub(crate) struct PriceQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    get: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    league: Option<String>,
}

impl PriceQuery {
    /// `name` takes precedence over `get`.
    pub(crate) fn item(&self) -> &str {
        self.name
            .as_deref()
            .or(self.get.as_deref())
            .unwrap_or(DEFAULT_ITEM)
    }

    pub(crate) fn league(&self) -> &str {
        self.league.as_deref().unwrap_or(DEFAULT_LEAGUE)
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct HistoryQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    item: Option<String>,
}

/// Fetches everything the price page shows. With no backend the page is empty.
pub(crate) async fn load_price_page(
    economy: Option<&EconomyClient>,
    query: &PriceQuery,
) -> Result<PricePageData, WebError> {
    let (item, league) = (query.item(), query.league());
    match economy {
        Some(economy) => Ok(economy.get_price_page(item, league).await?),
        None => Ok(PricePageData::empty(item, league)),
    }
}

async fn load_chart(
    economy: Option<&EconomyClient>,
    query: &PriceQuery,
) -> Result<(String, ChartData), economy_api::Error> {
    let (item, league) = (query.item(), query.league());
    let records = match economy {
        Some(economy) => economy.get_prices(item, league).await?,
        None => vec![],
    };
    Ok((chart_title(league, item), to_chart_data(item, &records)))
}

pub(crate) async fn price_page(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<PriceQuery>,
) -> Result<RenderPage<PricesPage>, WebError> {
    let data = load_price_page(economy.as_ref(), &query).await?;
    Ok(RenderPage(PricesPage {
        data,
        notice: economy.is_none().then_some(NO_BACKEND),
    }))
}

pub(crate) async fn history_page(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<HistoryQuery>,
) -> Result<RenderPage<HistoryPage>, WebError> {
    let history = match (economy, &query.item) {
        (Some(economy), Some(item)) => Some(economy.get_history(item).await?),
        _ => None,
    };
    Ok(RenderPage(HistoryPage {
        history,
        form: RawItemSearchForm::initial(query.item),
        errors: FormErrors::default(),
    }))
}

pub(crate) async fn chart_svg(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<PriceQuery>,
) -> Result<impl IntoResponse, WebError> {
    let (title, chart) = load_chart(economy.as_ref(), &query).await?;
    if chart.is_empty() {
        return Err(WebError::NoPriceData {
            item: query.item().to_string(),
            league: query.league().to_string(),
        });
    }
    let svg = render_chart(&chart, &title, CHART_SIZE)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

pub(crate) async fn chart_json(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<ChartData>, ApiError> {
    let (_, chart) = load_chart(economy.as_ref(), &query).await?;
    Ok(Json(chart))
}

#[cfg(test)]
mod test {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use poeledger_charts::ChartData;
    use tower::ServiceExt;

    use super::*;
    use crate::web::{router, test_backend, WebState};

    fn query(q: &str) -> PriceQuery {
        serde_json::from_str(q).unwrap()
    }

    #[test]
    fn query_defaults() {
        let q = query("{}");
        assert_eq!((q.item(), q.league()), ("Divine Orb", "Sanctum"));
        let q = query(r#"{"get": "Chaos Orb", "league": ""}"#);
        assert_eq!((q.item(), q.league()), ("Chaos Orb", "Sanctum"));
        let q = query(r#"{"name": "Headhunter", "get": "Chaos Orb", "league": "Crucible"}"#);
        assert_eq!((q.item(), q.league()), ("Headhunter", "Crucible"));
    }

    #[tokio::test]
    async fn no_backend_is_an_empty_page() {
        let data = load_price_page(None, &query("{}")).await.unwrap();
        assert_eq!(data, PricePageData::empty("Divine Orb", "Sanctum"));
    }

    #[tokio::test]
    async fn loads_everything() {
        let economy = test_backend::serve(test_backend::routes()).await;
        let data = load_price_page(Some(&economy), &query(r#"{"name": "Chaos Orb"}"#))
            .await
            .unwrap();
        assert_eq!(data.current_item, "Chaos Orb");
        assert_eq!(data.current_league, "Sanctum");
        assert_eq!(data.records.len(), 3);
        assert_eq!(data.filters.len(), 4);
        assert_eq!(data.leagues, ["Sanctum", "Crucible", "Kalandra"]);
    }

    async fn get(state: WebState, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn chart_json_keeps_backend_order() {
        let economy = Some(test_backend::serve(test_backend::routes()).await);
        let (status, body) = get(WebState { economy }, "/api/chart?name=Divine+Orb").await;
        assert_eq!(status, StatusCode::OK);
        let chart: ChartData = serde_json::from_slice(&body).unwrap();
        assert_eq!(chart.labels, ["2023-01-01", "2023-01-02", "2023-01-03"]);
        assert_eq!(chart.datasets[0].data, [150.0, 140.0, 160.0]);
        assert_eq!(chart.datasets[0].label, "Divine Orb");
    }

    #[tokio::test]
    async fn chart_svg_without_prices_is_not_found() {
        let (status, _) = get(WebState { economy: None }, "/chart.svg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn history() {
        let (status, body) = get(WebState { economy: None }, "/history").await;
        assert_eq!(status, StatusCode::OK);
        let body = String::from_utf8(body).unwrap();
        assert!(body.contains("Search for an item to see its listing history."));
        // a fresh form starts with the 10th quantile ticked
        assert!(body.contains(r#"name="tenthQuantile" value="true" checked"#));
        assert!(!body.contains(r#"name="fifteenthQuantile" value="true" checked"#));

        let economy = Some(test_backend::serve(test_backend::routes()).await);
        let (status, body) = get(WebState { economy }, "/history?item=Headhunter").await;
        assert_eq!(status, StatusCode::OK);
        let body = String::from_utf8(body).unwrap();
        assert!(body.contains("Affliction - Headhunter History"));
        assert!(body.contains("2024-01-03 10:00"));
    }
}
