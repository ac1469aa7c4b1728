//! Quiz question selection
//!
//! Each request carries the ids the player has already seen. The selector
//! removes those from the candidate pool and draws once from what is left,
//! so it always terminates: either a fresh question or an exhausted pool.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every question in the store
    All,
    /// Only questions in this category
    Category(i32),
}

impl QuizScope {
    /// Category id 0 means "all categories".
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}

/// Result of one draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// A question not yet asked
    Found(Question),
    /// Every question in the pool has been asked (or the pool is empty)
    Exhausted,
}

impl QuizDraw {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Found(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Draw uniformly from `pool` minus `previous`, using the thread RNG.
pub fn select(pool: Vec<Question>, previous: &[i32]) -> QuizDraw {
    select_with(&mut rand::thread_rng(), pool, previous)
}

/// Draw uniformly from `pool` minus `previous` with a caller-supplied RNG.
///
/// Previous ids that are not in the pool are ignored.
pub fn select_with<R: Rng + ?Sized>(rng: &mut R, pool: Vec<Question>, previous: &[i32]) -> QuizDraw {
    let asked: HashSet<i32> = previous.iter().copied().collect();
    let remaining: Vec<Question> = pool.into_iter().filter(|q| !asked.contains(&q.id)).collect();

    tracing::debug!(remaining = remaining.len(), asked = asked.len(), "drawing quiz question");

    match remaining.choose(rng) {
        Some(q) => QuizDraw::Found(q.clone()),
        None => QuizDraw::Exhausted,
    }
}
