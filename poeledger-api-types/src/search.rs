use serde::{Deserialize, Serialize};

/// A candidate that survived the fuzzy filter.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SearchResult {
    /// Normalised distance from the query, `0.0` is a perfect match.
    pub score: f32,
    pub title: String,
    /// Character ranges of `title` that matched, as `(start, len)`.
    pub matches: Vec<(usize, usize)>,
}
