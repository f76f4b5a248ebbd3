use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use manyworker_domain::access_policy::can_view;
use manyworker_domain::entities::{TaskDraft, TaskPatch};
use manyworker_errors::MarketplaceError;

use crate::auth::CurrentActor;
use crate::error::{ApiError, ApiResult};
use crate::response::{created, no_content, success};
use crate::routes::AppState;

/// 任务创建请求
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub description: String,
    pub address: Option<String>,
    pub max_price: f64,
    pub end_date: Option<DateTime<Utc>>,
    pub category_id: String,
}

/// 任务更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub description: String,
    pub address: Option<String>,
    pub max_price: f64,
    pub end_date: Option<DateTime<Utc>>,
    pub category_id: String,
}

fn validate_id(id: &str) -> ApiResult<()> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("任务 ID 不能为空".to_string()));
    }
    Ok(())
}

/// 列出全部任务；列表为空时返回 204
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> ApiResult<axum::response::Response> {
    let tasks = state.task_service.find_all().await?;
    if tasks.is_empty() {
        return Ok(no_content().into_response());
    }
    Ok(success(tasks).into_response())
}

/// 查询单个任务，按访问策略决定可见性
pub async fn get_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    validate_id(&id)?;

    let task = state
        .task_service
        .find_by_id(&id)
        .await?
        .ok_or_else(|| MarketplaceError::task_not_found(id.clone()))?;

    if !can_view(&actor, &task) {
        return Err(ApiError::Marketplace(MarketplaceError::permission_denied(
            "没有权限查看该任务",
        )));
    }

    Ok(success(task))
}

/// 创建任务，拥有者为当前登录的客户
pub async fn create_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let draft = TaskDraft {
        description: request.description,
        address: request.address,
        max_price: request.max_price,
        end_date: request.end_date,
        category_id: request.category_id,
    };

    let task = state.task_service.create(actor.id, draft).await?;
    Ok(created(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_id(&id)?;

    let patch = TaskPatch {
        description: request.description,
        address: request.address,
        max_price: request.max_price,
        end_date: request.end_date,
        category_id: request.category_id,
    };

    let task = state.task_service.update(&id, patch).await?;
    Ok(success(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    validate_id(&id)?;

    state.task_service.delete(&id).await?;
    Ok(success(format!("任务 {id} 已删除")))
}
