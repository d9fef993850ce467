pub mod error;
mod fuzzy_search;
mod item_search_form;
mod price_page;
mod static_content;
mod templates;

use std::net::SocketAddr;

use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use economy_api::EconomyClient;
use tower_http::trace::TraceLayer;

use self::static_content::static_path;

#[derive(Clone)]
pub(crate) struct WebState {
    /// `None` when no backend host is configured.
    pub(crate) economy: Option<EconomyClient>,
}

impl FromRef<WebState> for Option<EconomyClient> {
    fn from_ref(input: &WebState) -> Self {
        input.economy.clone()
    }
}

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(price_page::price_page))
        .route("/history", get(price_page::history_page))
        .route("/chart.svg", get(price_page::chart_svg))
        .route("/api/chart", get(price_page::chart_json))
        .route("/api/search/filters", get(fuzzy_search::search_filters))
        .route("/api/search/leagues", get(fuzzy_search::search_leagues))
        .route("/search", post(item_search_form::submit_search))
        .route("/static/{*path}", get(static_path))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
