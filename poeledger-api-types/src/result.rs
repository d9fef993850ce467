use serde::{Deserialize, Serialize};

/// Body of every failed JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JsonError {
    pub error_message: String,
}
