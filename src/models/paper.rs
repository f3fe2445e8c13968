//! Paper (bibliographic record) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Bibliographic record keyed by the remote catalog's numeric corpus id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Paper {
    /// Stable numeric identifier issued by the remote catalog
    pub corpus_id: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    #[sqlx(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub year: Option<i32>,
}

/// Search query parameters, shared by the live and local search endpoints
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct PaperSearchQuery {
    /// Free-text query matched against title and abstract
    #[validate(length(min = 1, message = "Query must not be empty"))]
    pub query: String,
    /// Maximum number of results (defaults to 10)
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl PaperSearchQuery {
    /// Effective result cap after applying the default
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(10)
    }
}
