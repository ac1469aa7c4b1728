//! Storage seam used by the HTTP handlers
//!
//! Provides a trait for the trivia store, with:
//! - PostgreSQL implementation over the repositories
//! - In-memory implementation (see `memory`) for tests and demos

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewQuestion, SearchTerm};
use super::repos::{Category, CategoryRepo, DbError, Question, QuestionRepo};

/// Query, insert and delete primitives over questions and categories.
///
/// Every list comes back ordered by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// Single category; `DbError::NotFound` on a miss.
    async fn category(&self, id: i32) -> Result<Category, DbError>;

    async fn questions(&self) -> Result<Vec<Question>, DbError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match on question text.
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError>;

    /// Single question; `DbError::NotFound` on a miss.
    async fn question(&self, id: i32) -> Result<Question, DbError>;

    async fn count_questions(&self) -> Result<i64, DbError>;

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError>;

    /// Remove a question; `DbError::NotFound` if it is already gone.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_category(category).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        tracing::debug!(term = term.as_str(), "searching questions");
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn question(&self, id: i32) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        QuestionRepo::new(&self.pool).count().await
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = QuestionRepo::new(&self.pool).insert(new).await?;
        tracing::debug!(id = question.id, "inserted question");
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await?;
        tracing::debug!(id, "deleted question");
        Ok(())
    }
}
