use axum::{
    extract::{Query, State},
    Json,
};
use economy_api::EconomyClient;
use poeledger_api_types::search::SearchResult;
use serde::Deserialize;
use sublime_fuzzy::{FuzzySearch, Match, Scoring};

use super::error::ApiError;

/// Candidates this far or further from the query are dropped.
pub(crate) const FILTER_THRESHOLD: f32 = 0.4;

pub(crate) fn fuzzy_search(query: &str, target: &str) -> Option<Match> {
    let scoring = Scoring::default();
    let search = FuzzySearch::new(query, target)
        .case_insensitive()
        .score_with(&scoring);
    search.best_match()
}

/// `0.0` for a match as good as the query against itself, `1.0` for no match at all.
fn distance(best: isize, m: &Match) -> f32 {
    if best <= 0 {
        return 0.0;
    }
    (1.0 - m.score() as f32 / best as f32).clamp(0.0, 1.0)
}

/// Keeps the candidates within [`FILTER_THRESHOLD`] of `query`, closest first.
/// Ties keep the order of `candidates`. An empty query keeps everything.
pub(crate) fn fuzzy_filter<S: AsRef<str>>(candidates: &[S], query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return candidates
            .iter()
            .map(|c| SearchResult {
                score: 0.0,
                title: c.as_ref().to_string(),
                matches: vec![],
            })
            .collect();
    }
    let best = fuzzy_search(query, query).map(|m| m.score()).unwrap_or(0);
    let mut results: Vec<SearchResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let title = candidate.as_ref();
            let m = fuzzy_search(query, title)?;
            let score = distance(best, &m);
            (score < FILTER_THRESHOLD).then(|| SearchResult {
                score,
                title: title.to_string(),
                matches: m
                    .continuous_matches()
                    .map(|c| (c.start(), c.len()))
                    .collect(),
            })
        })
        .collect();
    results.sort_by(|a, b| a.score.total_cmp(&b.score));
    results
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub(crate) async fn search_filters(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Some(economy) = economy else {
        return Ok(Json(vec![]));
    };
    let filters = economy.get_filters().await?;
    Ok(Json(fuzzy_filter(&filters, &query.q)))
}

pub(crate) async fn search_leagues(
    State(economy): State<Option<EconomyClient>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Some(economy) = economy else {
        return Ok(Json(vec![]));
    };
    let leagues = economy.get_leagues().await?;
    Ok(Json(fuzzy_filter(&leagues, &query.q)))
}
