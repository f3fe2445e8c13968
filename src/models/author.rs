//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author identity as issued by the remote catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    /// Opaque identifier, stable across papers
    pub author_id: String,
    pub name: String,
}

/// Author together with their rank in one paper's author list.
/// Carried from the mapper into the persistence layer; the rank is what
/// the `wrote` edge stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithPosition {
    pub author_id: String,
    pub name: String,
    /// Zero-based position in the declared author ordering
    pub position: i32,
}
