//! Paper endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Paper, PaperId, PaperSearchQuery},
    repository::PaperRepository,
};

/// Search result wrapper
#[derive(Serialize, ToSchema)]
pub struct PaperListResponse {
    /// Matching papers
    pub papers: Vec<Paper>,
    /// Number of papers returned
    pub total: i64,
}

impl From<Vec<Paper>> for PaperListResponse {
    fn from(papers: Vec<Paper>) -> Self {
        Self {
            total: papers.len() as i64,
            papers,
        }
    }
}

/// Search the remote catalog, persisting everything that comes back
#[utoipa::path(
    get,
    path = "/papers/search",
    tag = "papers",
    params(PaperSearchQuery),
    responses(
        (status = 200, description = "Freshly fetched papers", body = PaperListResponse),
        (status = 400, description = "Invalid query"),
        (status = 429, description = "Remote rate limit exhausted"),
        (status = 502, description = "Remote catalog unreachable")
    )
)]
pub async fn sync_search(
    State(state): State<crate::AppState>,
    Query(query): Query<PaperSearchQuery>,
) -> AppResult<Json<PaperListResponse>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let papers = state
        .services
        .sync
        .search(&query.query, query.effective_limit())
        .await?;
    Ok(Json(papers.into()))
}

/// Search papers already in the local store
#[utoipa::path(
    get,
    path = "/papers",
    tag = "papers",
    params(PaperSearchQuery),
    responses(
        (status = 200, description = "Matching stored papers", body = PaperListResponse),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn local_search(
    State(state): State<crate::AppState>,
    Query(query): Query<PaperSearchQuery>,
) -> AppResult<Json<PaperListResponse>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let papers = state
        .services
        .catalog
        .search(&query.query, query.effective_limit())
        .await?;
    Ok(Json(papers.into()))
}

/// Get a paper by corpus id
#[utoipa::path(
    get,
    path = "/papers/{corpus_id}",
    tag = "papers",
    params(
        ("corpus_id" = i64, Path, description = "Corpus id of the paper")
    ),
    responses(
        (status = 200, description = "Paper details", body = Paper),
        (status = 404, description = "Paper not found")
    )
)]
pub async fn get_paper(
    State(state): State<crate::AppState>,
    Path(corpus_id): Path<i64>,
) -> AppResult<Json<Paper>> {
    let paper = state
        .services
        .catalog
        .get_by_corpus_id(corpus_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Paper {} not found", corpus_id)))?;
    Ok(Json(paper))
}

/// Get a paper by one of its external ids
#[utoipa::path(
    get,
    path = "/papers/external-id/{sha}",
    tag = "papers",
    params(
        ("sha" = String, Path, description = "External sha identifier")
    ),
    responses(
        (status = 200, description = "Paper details", body = Paper),
        (status = 404, description = "No paper recorded for this sha")
    )
)]
pub async fn get_paper_by_external_id(
    State(state): State<crate::AppState>,
    Path(sha): Path<String>,
) -> AppResult<Json<Paper>> {
    let paper = state
        .services
        .catalog
        .get_by_external_id(&sha)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No paper recorded for sha {}", sha)))?;
    Ok(Json(paper))
}

/// List every external id recorded for a paper
#[utoipa::path(
    get,
    path = "/papers/{corpus_id}/external-ids",
    tag = "papers",
    params(
        ("corpus_id" = i64, Path, description = "Corpus id of the paper")
    ),
    responses(
        (status = 200, description = "External ids, stale ones included", body = [PaperId])
    )
)]
pub async fn get_external_ids(
    State(state): State<crate::AppState>,
    Path(corpus_id): Path<i64>,
) -> AppResult<Json<Vec<PaperId>>> {
    let ids = state.services.catalog.get_external_ids(corpus_id).await?;
    Ok(Json(ids))
}

/// List a paper's authors in declared order
#[utoipa::path(
    get,
    path = "/papers/{corpus_id}/authors",
    tag = "papers",
    params(
        ("corpus_id" = i64, Path, description = "Corpus id of the paper")
    ),
    responses(
        (status = 200, description = "Authors ordered by position", body = [Author])
    )
)]
pub async fn get_authors(
    State(state): State<crate::AppState>,
    Path(corpus_id): Path<i64>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.get_authors(corpus_id).await?;
    Ok(Json(authors))
}
