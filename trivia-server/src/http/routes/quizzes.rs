//! Quiz play endpoint
//!
//! Stateless: the client sends back every id it has been shown so far.

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::Question;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::lenient::lenient_i32;
use crate::quiz::{self, QuizScope};

/// Quiz request
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown. Older clients misspell the key.
    #[serde(default, alias = "previous_quesitons")]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector; id 0 means every category
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
}

/// Quiz response. `question` is absent once the pool is used up.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question, or none when exhausted
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (Some(previous), Some(category)) = (req.previous_questions, req.quiz_category) else {
        return Err(ApiError::bad_request(
            "previous_questions and quiz_category are required",
        ));
    };

    let pool = match QuizScope::from_category_id(category.id) {
        QuizScope::All => state.store.questions().await?,
        QuizScope::Category(id) => state.store.questions_in_category(id).await?,
    };

    let question = quiz::select(pool, &previous).into_question();
    if question.is_none() {
        tracing::debug!(asked = previous.len(), "quiz exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
