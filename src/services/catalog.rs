//! Catalog service answering queries from the local store only

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Author, Paper, PaperId},
    repository::{PaperRepository, Repository},
};

/// Store-only view over the paper catalog. Never contacts the remote
/// source; a miss is a miss.
#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PaperRepository for CatalogService {
    async fn search(&self, query: &str, limit: u32) -> AppResult<Vec<Paper>> {
        self.repository.papers.search(query, limit).await
    }

    async fn get_by_corpus_id(&self, corpus_id: i64) -> AppResult<Option<Paper>> {
        self.repository.papers.get_by_corpus_id(corpus_id).await
    }

    async fn get_by_external_id(&self, sha: &str) -> AppResult<Option<Paper>> {
        self.repository.papers.get_by_external_id(sha).await
    }

    async fn get_external_ids(&self, corpus_id: i64) -> AppResult<Vec<PaperId>> {
        self.repository.papers.get_external_ids(corpus_id).await
    }

    async fn get_authors(&self, corpus_id: i64) -> AppResult<Vec<Author>> {
        self.repository.papers.get_authors(corpus_id).await
    }
}
