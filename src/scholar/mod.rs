//! Remote scholarly catalog integration
//!
//! Talks to the Semantic Scholar Graph API: a rate-limited HTTP client,
//! the wire-format records it returns, and the mapper that normalizes
//! those records into domain entities.

pub mod client;
pub mod mapper;
pub mod records;

pub use client::{PaperFetcher, ScholarApiClient};
pub use mapper::{MappedBatch, RecordMapper};
pub use records::{AuthorRecord, PaperRecord, SearchResponse};
