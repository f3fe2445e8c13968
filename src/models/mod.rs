//! Data models for BibSync

pub mod author;
pub mod paper;
pub mod paper_id;

pub use author::{Author, AuthorWithPosition};
pub use paper::{Paper, PaperSearchQuery};
pub use paper_id::PaperId;
