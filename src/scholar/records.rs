//! Wire-format records returned by the remote catalog
//!
//! Every field is optional: the remote API omits, nulls or reshapes
//! fields freely, so nothing here is trusted until the mapper has
//! normalized it.

use serde::Deserialize;

/// Envelope of a `/paper/search` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub data: Vec<PaperRecord>,
}

/// One paper as the remote catalog describes it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "paperId")]
    pub paper_id: Option<String>,
    #[serde(rename = "corpusId")]
    pub corpus_id: Option<i64>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
}

/// One author entry inside a paper record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(rename = "authorId")]
    pub author_id: Option<String>,
    pub name: Option<String>,
}
