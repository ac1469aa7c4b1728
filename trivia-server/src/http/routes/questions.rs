//! Question endpoints
//!
//! `POST /questions` still accepts both of its historical body shapes, but
//! the body is decoded into a [`QuestionsPost`] first so each shape is
//! validated on its own. `POST /questions/search` takes only the search
//! shape.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::{routing::{delete, get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{DbError, Question};
use crate::http::error::ApiError;
use crate::http::extractors::{IntId, JsonBody};
use crate::http::server::AppState;
use crate::models::lenient::lenient_opt_i32;
use crate::models::{NewQuestion, Pagination, PaginationParams, SearchTerm, ValidationError};
use super::categories::{category_map, CategoryMap};

/// Create question request. Every field is optional here so that a missing
/// one is reported as a validation failure, not a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub category: Option<i32>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        NewQuestion::new(req.question, req.answer, req.difficulty, req.category)
    }
}

/// Search request for `POST /questions/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// The two operations behind `POST /questions`
#[derive(Debug)]
pub enum QuestionsPost {
    Search(SearchTerm),
    Create(CreateQuestionRequest),
}

impl QuestionsPost {
    /// Decide which operation a body asks for.
    ///
    /// A non-empty string `searchTerm` selects search. A missing, null or
    /// empty `searchTerm` selects create. Anything else in `searchTerm`, or
    /// a body that is not an object, is a bad request. Create fields of the
    /// wrong type are unprocessable.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let Value::Object(mut fields) = body else {
            return Err(ApiError::bad_request("request body must be a JSON object"));
        };

        match fields.remove("searchTerm") {
            Some(Value::String(term)) if !term.is_empty() => {
                return Ok(Self::Search(SearchTerm::new(&term)?));
            }
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(ApiError::bad_request("searchTerm must be a string")),
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self::Create)
            .map_err(ApiError::unprocessable)
    }
}

/// Paginated question list with categories
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

/// Search results
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of all questions, not of matches
    pub total_questions: i64,
}

/// Result of creating a question
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Result of deleting a question
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// GET /questions - one page of questions plus the category map
///
/// An empty page is a 404, whether the store is empty or the page is past
/// the end.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let all = state.store.questions().await?;
    let total_questions = all.len() as i64;
    let questions = params.with_per_page(state.per_page).paginate(all);
    let categories = category_map(state.store.categories().await?);

    if questions.is_empty() {
        return Err(ApiError::not_found("questions page", params.page_number()));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories,
    }))
}

/// DELETE /questions/{id}
///
/// A lookup miss is a 404. Every other failure on this path, including the
/// row vanishing between lookup and delete, is a 422.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IntId(id): IntId,
) -> Result<Json<DeletedResponse>, ApiError> {
    match state.store.question(id).await {
        Ok(_) => {}
        Err(DbError::NotFound { resource, id }) => return Err(ApiError::NotFound { resource, id }),
        Err(e) => return Err(ApiError::unprocessable(e)),
    }

    state
        .store
        .delete_question(id)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions - create, or search when the body carries `searchTerm`
async fn post_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Response, ApiError> {
    let page = params.with_per_page(state.per_page);
    match QuestionsPost::from_body(body)? {
        QuestionsPost::Search(term) => Ok(search(&state, &term, page).await?.into_response()),
        QuestionsPost::Create(req) => Ok(create(&state, req, page).await?.into_response()),
    }
}

/// POST /questions/search - search only
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = SearchTerm::new(&req.search_term).map_err(|e| ApiError::bad_request(e.to_string()))?;
    search(&state, &term, params.with_per_page(state.per_page)).await
}

async fn search(
    state: &AppState,
    term: &SearchTerm,
    page: Pagination,
) -> Result<Json<SearchResponse>, ApiError> {
    let matches = state.store.search_questions(term).await?;
    if matches.is_empty() {
        return Err(ApiError::not_found("search", term.as_str()));
    }

    let total_questions = state.store.count_questions().await?;
    Ok(Json(SearchResponse {
        success: true,
        questions: page.paginate(matches),
        total_questions,
    }))
}

/// Insert, then return the requested page of the refreshed list. Any store
/// failure after validation is a 422.
async fn create(
    state: &AppState,
    req: CreateQuestionRequest,
    page: Pagination,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::try_from(req)?;

    let created = state
        .store
        .insert_question(&new)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let all = state.store.questions().await.map_err(ApiError::unprocessable)?;
    let total_questions = all.len() as i64;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        question_created: created.question,
        questions: page.paginate(all),
        total_questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
