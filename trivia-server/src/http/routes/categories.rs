//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::{Category, DbError, Question};
use crate::http::error::ApiError;
use crate::http::extractors::IntId;
use crate::http::server::AppState;
use crate::models::PaginationParams;

/// Category id to label, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i32, String>;

pub(crate) fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Category list response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions within one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count across all categories, not just this one
    pub total_questions: i64,
    pub current_category: String,
}

/// GET /categories - every category as an id→label map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.store.categories().await?);
    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "all"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - questions scoped to one category
///
/// An unknown category is a 400, not a 404. Clients depend on that.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    IntId(id): IntId,
    Query(params): Query<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = match state.store.category(id).await {
        Ok(category) => category,
        Err(DbError::NotFound { .. }) => {
            return Err(ApiError::bad_request(format!("category {} does not exist", id)))
        }
        Err(e) => return Err(e.into()),
    };

    let page = params.with_per_page(state.per_page);
    let questions = page.paginate(state.store.questions_in_category(category.id).await?);
    let total_questions = state.store.count_questions().await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
