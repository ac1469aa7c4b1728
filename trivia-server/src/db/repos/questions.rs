//! Question repository
//!
//! Lists always come back ordered by id so page windows are stable between
//! requests as long as nothing is written in between.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::{NewQuestion, SearchTerm};
use super::DbError;

/// Question record from database.
///
/// Serializes to the wire shape the API returns for a question.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every question, ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions in one category, ordered by id.
    pub async fn list_for_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains the term, ignoring case.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Total number of questions.
    pub async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("question", id))
    }

    /// Insert a question, returning it with its generated id.
    ///
    /// An unknown category trips the foreign key and comes back as
    /// `DbError::Constraint`.
    pub async fn insert(&self, new: &NewQuestion) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_foreign_key_violation() {
                    return DbError::Constraint(db.message().to_owned());
                }
            }
            DbError::Sqlx(e)
        })
    }

    /// Delete by id. A missing row is `DbError::NotFound`.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations");
        crate::db::migrations::seed_categories(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let new = NewQuestion::new(Some("repo test?".into()), Some("yes".into()), Some(1), Some(1))
            .unwrap();
        let created = repo.insert(&new).await.expect("insert");
        assert_eq!(repo.get(created.id).await.expect("get"), created);

        repo.delete(created.id).await.expect("delete");
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
        assert!(repo.delete(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_is_constraint_error() {
        let pool = pool().await;
        let new = NewQuestion::new(Some("orphan".into()), Some("a".into()), Some(1), Some(-5))
            .unwrap();

        let err = QuestionRepo::new(&pool).insert(&new).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_wildcards_literally() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let term = SearchTerm::new("%%no-such-question%%").unwrap();
        assert!(repo.search(&term).await.expect("search").is_empty());
    }
}
