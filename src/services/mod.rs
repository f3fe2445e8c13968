//! Business logic services

pub mod catalog;
pub mod sync;

use std::sync::Arc;

use crate::{repository::Repository, scholar::{PaperFetcher, RecordMapper}};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub sync: sync::SyncService,
}

impl Services {
    /// Create all services with the given repository and remote fetcher
    pub fn new(repository: Repository, fetcher: Arc<dyn PaperFetcher>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            sync: sync::SyncService::new(fetcher, RecordMapper::new(), repository),
        }
    }
}
