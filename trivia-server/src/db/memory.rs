//! In-memory trivia store
//!
//! Mirrors the PostgreSQL store closely enough for router tests and
//! throwaway demo servers: ids are generated and never reused, inserts with
//! an unknown category are rejected like a foreign key would, and search is
//! a case-insensitive substring match.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::models::{NewQuestion, SearchTerm};
use super::migrations::DEFAULT_CATEGORIES;
use super::repos::{Category, DbError, Question};
use super::store::TriviaStore;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
    fail_reads: bool,
    fail_writes: bool,
}

/// Mutex-guarded store held entirely in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the default category set.
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        for (id, kind) in DEFAULT_CATEGORIES {
            store.add_category(id, kind);
        }
        store
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or relabel a category.
    pub fn add_category(&self, id: i32, kind: &str) {
        self.tables().categories.insert(id, kind.to_owned());
    }

    /// Insert a question directly, bypassing failure injection.
    pub fn add_question(&self, question: &str, answer: &str, category: i32, difficulty: i32) -> i32 {
        let mut tables = self.tables();
        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.to_owned(),
                answer: answer.to_owned(),
                category,
                difficulty,
            },
        );
        id
    }

    /// Make every subsequent read fail with `DbError::Unavailable`.
    pub fn fail_reads(&self, fail: bool) {
        self.tables().fail_reads = fail;
    }

    /// Make every subsequent insert and delete fail with `DbError::Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.tables().fail_writes = fail;
    }

    fn readable(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        let tables = self.tables();
        if tables.fail_reads {
            return Err(DbError::Unavailable("reads disabled".into()));
        }
        Ok(tables)
    }

    fn writable(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        let tables = self.tables();
        if tables.fail_writes {
            return Err(DbError::Unavailable("writes disabled".into()));
        }
        Ok(tables)
    }

    fn select<F>(&self, keep: F) -> Result<Vec<Question>, DbError>
    where
        F: Fn(&Question) -> bool,
    {
        Ok(self
            .readable()?
            .questions
            .values()
            .filter(|&q| keep(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self
            .readable()?
            .categories
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        self.readable()?
            .categories
            .get(&id)
            .map(|kind| Category {
                id,
                kind: kind.clone(),
            })
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        self.select(|_| true)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        self.select(|q| q.category == category)
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        self.select(|q| term.matches(&q.question))
    }

    async fn question(&self, id: i32) -> Result<Question, DbError> {
        self.readable()?
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        Ok(self.readable()?.questions.len() as i64)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.writable()?;
        if !tables.categories.contains_key(&new.category()) {
            return Err(DbError::Constraint(format!(
                "category {} does not exist",
                new.category()
            )));
        }

        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question: new.question().to_owned(),
            answer: new.answer().to_owned(),
            category: new.category(),
            difficulty: new.difficulty(),
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.writable()?
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("question", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion::new(Some(text.into()), Some("answer".into()), Some(2), Some(category)).unwrap()
    }

    #[tokio::test]
    async fn ids_are_generated_and_not_reused() {
        let store = MemoryStore::with_default_categories();

        let first = store.insert_question(&new_question("one", 1)).await.unwrap();
        let second = store.insert_question(&new_question("two", 1)).await.unwrap();
        assert_eq!(second.id, first.id + 1);

        store.delete_question(second.id).await.unwrap();
        let third = store.insert_question(&new_question("three", 1)).await.unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let store = MemoryStore::with_default_categories();
        let err = store.insert_question(&new_question("orphan", 99)).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
        assert_eq!(store.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn lists_are_ordered_by_id() {
        let store = MemoryStore::with_default_categories();
        let a = store.add_question("Alpha", "a", 2, 1);
        let b = store.add_question("Beta", "b", 1, 1);
        let c = store.add_question("Gamma", "c", 2, 1);

        let ids: Vec<i32> = store.questions().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![a, b, c]);

        let ids: Vec<i32> = store
            .questions_in_category(2)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::with_default_categories();
        store.add_question("What is the TITLE of the book?", "x", 1, 1);
        store.add_question("Who painted it?", "y", 2, 1);

        let term = SearchTerm::new("title").unwrap();
        let hits = store.search_questions(&term).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].question.contains("TITLE"));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.delete_question(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn injected_failures() {
        let store = MemoryStore::with_default_categories();
        let id = store.add_question("q", "a", 1, 1);

        store.fail_writes(true);
        assert!(matches!(
            store.delete_question(id).await.unwrap_err(),
            DbError::Unavailable(_)
        ));
        assert!(store.question(id).await.is_ok());

        store.fail_reads(true);
        assert!(matches!(
            store.categories().await.unwrap_err(),
            DbError::Unavailable(_)
        ));
    }
}
