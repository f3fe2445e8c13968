//! Normalization of raw catalog records into domain entities

use indexmap::IndexMap;

use crate::models::{AuthorWithPosition, Paper, PaperId};
use crate::scholar::records::PaperRecord;

/// Normalized output of one mapped search batch.
///
/// `papers` preserves the remote result order. The two maps are keyed
/// by corpus id; `IndexMap` keeps their iteration order equal to the
/// batch order so persistence touches rows in a stable sequence.
#[derive(Debug, Default)]
pub struct MappedBatch {
    pub papers: Vec<Paper>,
    pub paper_ids: IndexMap<i64, PaperId>,
    pub authors: IndexMap<i64, Vec<AuthorWithPosition>>,
}

impl MappedBatch {
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// Maps loosely-typed remote records into the relational model.
///
/// Records that cannot be addressed (no corpus id) or that lack a title
/// are dropped rather than rejected: the remote catalog routinely
/// returns partial records and one bad entry must not fail the batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMapper;

impl RecordMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, records: &[PaperRecord]) -> MappedBatch {
        let mut batch = MappedBatch::default();

        for record in records {
            let Some(corpus_id) = record.corpus_id else {
                tracing::debug!("Dropping record without corpus id");
                continue;
            };
            let Some(title) = record.title.clone().filter(|t| !t.is_empty()) else {
                tracing::debug!(corpus_id, "Dropping record without title");
                continue;
            };

            batch.papers.push(Paper {
                corpus_id,
                title,
                abstract_text: record.abstract_text.clone(),
                year: record.year,
            });

            // A sha carried by a fresh fetch is always the current primary id
            if let Some(sha) = record.paper_id.as_deref().filter(|s| !s.is_empty()) {
                batch.paper_ids.insert(
                    corpus_id,
                    PaperId {
                        sha: sha.to_string(),
                        corpus_id,
                        is_primary: true,
                    },
                );
            }

            // Position is the index in the raw author list. Entries without
            // a usable id yield no edge but do not shift later positions.
            let entries: Vec<AuthorWithPosition> = record
                .authors
                .iter()
                .enumerate()
                .filter_map(|(position, author)| {
                    let author_id = author.author_id.as_deref().filter(|s| !s.is_empty())?;
                    let name = author.name.as_deref()?;
                    Some(AuthorWithPosition {
                        author_id: author_id.to_string(),
                        name: name.to_string(),
                        position: position as i32,
                    })
                })
                .collect();

            if !entries.is_empty() {
                batch.authors.insert(corpus_id, entries);
            }
        }

        batch
    }
}
