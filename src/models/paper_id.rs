//! External identifier model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// External (sha-style) identifier attached to a paper.
///
/// The remote catalog reissues these over time, so several shas may
/// resolve to the same corpus id. The one carried by the latest fetched
/// record is flagged as primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PaperId {
    pub sha: String,
    pub corpus_id: i64,
    pub is_primary: bool,
}
