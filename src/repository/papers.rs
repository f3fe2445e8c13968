//! Papers repository
//!
//! Owns the four-table schema (papers, paperids, authors, wrote) and the
//! transactional upsert path that keeps a fetched batch atomic.

use indexmap::IndexMap;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, AuthorWithPosition, Paper, PaperId},
};

/// Idempotent schema setup, safe to run on every startup
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS papers (
        corpus_id BIGINT PRIMARY KEY,
        title TEXT NOT NULL,
        abstract TEXT,
        year INTEGER,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS paperids (
        sha TEXT PRIMARY KEY,
        corpus_id BIGINT NOT NULL REFERENCES papers(corpus_id) ON DELETE CASCADE,
        is_primary BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_paperids_corpus_id ON paperids(corpus_id)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        author_id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS wrote (
        author_id TEXT NOT NULL REFERENCES authors(author_id) ON DELETE CASCADE,
        corpus_id BIGINT NOT NULL REFERENCES papers(corpus_id) ON DELETE CASCADE,
        position INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (author_id, corpus_id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_wrote_author_id ON wrote(author_id)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_wrote_corpus_id ON wrote(corpus_id)
    "#,
];

#[derive(Clone)]
pub struct PapersRepository {
    pool: Pool<Postgres>,
}

impl PapersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn init_schema(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Write a mapped batch in one transaction.
    ///
    /// Every entity uses insert-or-overwrite keyed by its primary key, so
    /// replaying the same batch is a no-op. Either all rows across the
    /// four tables commit or none do.
    pub async fn upsert(
        &self,
        papers: &[Paper],
        paper_ids: &IndexMap<i64, PaperId>,
        authors: &IndexMap<i64, Vec<AuthorWithPosition>>,
    ) -> AppResult<()> {
        if papers.is_empty() && paper_ids.is_empty() && authors.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        for paper in papers {
            sqlx::query(
                r#"
                INSERT INTO papers (corpus_id, title, abstract, year)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (corpus_id)
                DO UPDATE SET
                    title = EXCLUDED.title,
                    abstract = EXCLUDED.abstract,
                    year = EXCLUDED.year
                "#,
            )
            .bind(paper.corpus_id)
            .bind(&paper.title)
            .bind(&paper.abstract_text)
            .bind(paper.year)
            .execute(&mut *tx)
            .await?;
        }

        for paper_id in paper_ids.values() {
            sqlx::query(
                r#"
                INSERT INTO paperids (sha, corpus_id, is_primary)
                VALUES ($1, $2, $3)
                ON CONFLICT (sha)
                DO UPDATE SET
                    corpus_id = EXCLUDED.corpus_id,
                    is_primary = EXCLUDED.is_primary
                "#,
            )
            .bind(&paper_id.sha)
            .bind(paper_id.corpus_id)
            .bind(paper_id.is_primary)
            .execute(&mut *tx)
            .await?;
        }

        for (corpus_id, entries) in authors {
            for entry in entries {
                sqlx::query(
                    r#"
                    INSERT INTO authors (author_id, name)
                    VALUES ($1, $2)
                    ON CONFLICT (author_id)
                    DO UPDATE SET name = EXCLUDED.name
                    "#,
                )
                .bind(&entry.author_id)
                .bind(&entry.name)
                .execute(&mut *tx)
                .await?;

                sqlx::query(
                    r#"
                    INSERT INTO wrote (author_id, corpus_id, position)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (author_id, corpus_id)
                    DO UPDATE SET position = EXCLUDED.position
                    "#,
                )
                .bind(&entry.author_id)
                .bind(corpus_id)
                .bind(entry.position)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get a paper by corpus id
    pub async fn get_by_corpus_id(&self, corpus_id: i64) -> AppResult<Option<Paper>> {
        let paper = sqlx::query_as::<_, Paper>("SELECT * FROM papers WHERE corpus_id = $1")
            .bind(corpus_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(paper)
    }

    /// Resolve an external sha to its corpus entry, then load the paper
    pub async fn get_by_external_id(&self, sha: &str) -> AppResult<Option<Paper>> {
        let corpus_id: Option<i64> =
            sqlx::query_scalar("SELECT corpus_id FROM paperids WHERE sha = $1")
                .bind(sha)
                .fetch_optional(&self.pool)
                .await?;

        match corpus_id {
            Some(corpus_id) => self.get_by_corpus_id(corpus_id).await,
            None => Ok(None),
        }
    }

    /// All external ids recorded for a corpus entry. The store never
    /// prunes stale ids, so this can return more than one row.
    pub async fn get_external_ids(&self, corpus_id: i64) -> AppResult<Vec<PaperId>> {
        let ids = sqlx::query_as::<_, PaperId>("SELECT * FROM paperids WHERE corpus_id = $1")
            .bind(corpus_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    /// Authors of a paper, ordered by their declared position
    pub async fn get_authors(&self, corpus_id: i64) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.author_id, a.name
            FROM authors a
            JOIN wrote w ON w.author_id = a.author_id
            WHERE w.corpus_id = $1
            ORDER BY w.position ASC
            "#,
        )
        .bind(corpus_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    /// Relevance-ranked full-text search over title and abstract.
    /// Rank ties fall back to corpus id so result order is deterministic.
    pub async fn search(&self, query: &str, limit: u32) -> AppResult<Vec<Paper>> {
        let papers = sqlx::query_as::<_, Paper>(
            r#"
            SELECT *
            FROM papers
            WHERE to_tsvector('english', title || ' ' || COALESCE(abstract, ''))
                  @@ plainto_tsquery('english', $1)
            ORDER BY ts_rank(
                to_tsvector('english', title || ' ' || COALESCE(abstract, '')),
                plainto_tsquery('english', $1)
            ) DESC, corpus_id ASC
            LIMIT $2
            "#,
        )
        .bind(query)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(papers)
    }
}
