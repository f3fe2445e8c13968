//! Repository layer for database operations

pub mod papers;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::error::AppResult;
use crate::models::{Author, Paper, PaperId};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub papers: papers::PapersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            papers: papers::PapersRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Read surface over the paper store.
///
/// Two implementations exist: the catalog service answers purely from
/// the local store, the sync service fetches from the remote catalog and
/// persists before answering `search`. Point lookups never fall back to
/// the remote side on either implementation.
#[async_trait]
pub trait PaperRepository: Send + Sync {
    /// Free-text search over titles and abstracts
    async fn search(&self, query: &str, limit: u32) -> AppResult<Vec<Paper>>;

    /// Look up one paper by its corpus id
    async fn get_by_corpus_id(&self, corpus_id: i64) -> AppResult<Option<Paper>>;

    /// Resolve an external sha to its paper
    async fn get_by_external_id(&self, sha: &str) -> AppResult<Option<Paper>>;

    /// All external ids ever recorded for a paper, stale ones included
    async fn get_external_ids(&self, corpus_id: i64) -> AppResult<Vec<PaperId>>;

    /// Authors of a paper in declared order
    async fn get_authors(&self, corpus_id: i64) -> AppResult<Vec<Author>>;
}
