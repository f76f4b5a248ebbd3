use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use manyworker_domain::entities::{Category, CategoryPatch};

use crate::auth::CurrentActor;
use crate::error::ApiResult;
use crate::response::{created, no_content, success};
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub applicable_laws: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub title: String,
    #[serde(default)]
    pub applicable_laws: Vec<String>,
}

pub async fn list_categories(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> ApiResult<axum::response::Response> {
    let categories = state.category_service.find_all().await?;
    if categories.is_empty() {
        return Ok(no_content().into_response());
    }
    Ok(success(categories).into_response())
}

pub async fn create_category(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Json(request): Json<CreateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let category = Category {
        id: request.id,
        title: request.title,
        applicable_laws: request.applicable_laws,
    };
    let stored = state.category_service.create(category).await?;
    Ok(created(stored))
}

pub async fn update_category(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
    Json(request): Json<UpdateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let patch = CategoryPatch {
        title: request.title,
        applicable_laws: request.applicable_laws,
    };
    let category = state.category_service.update(&id, patch).await?;
    Ok(success(category))
}

/// 删除分类；仍被任务引用时返回 409
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.category_service.delete(&id).await?;
    Ok(success(format!("分类 {id} 已删除")))
}
