use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use manyworker_errors::MarketplaceError;

use crate::auth::CurrentActor;
use crate::error::ApiResult;
use crate::response::{created, no_content, success};
use crate::routes::AppState;

/// 点对点消息请求，发送者为当前登录的参与者
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub subject: String,
    pub body: String,
}

/// 广播请求
#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    pub subject: String,
    pub body: String,
}

pub async fn send_message(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let message = state
        .message_service
        .send(actor.id, request.recipient_id, request.subject, request.body)
        .await?;
    Ok(created(message))
}

pub async fn broadcast_message(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(request): Json<BroadcastRequest>,
) -> ApiResult<impl IntoResponse> {
    let messages = state
        .message_service
        .broadcast(actor.id, request.subject, request.body)
        .await?;
    Ok(created(messages))
}

pub async fn list_messages(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> ApiResult<axum::response::Response> {
    let messages = state.message_service.find_all().await?;
    if messages.is_empty() {
        return Ok(no_content().into_response());
    }
    Ok(success(messages).into_response())
}

pub async fn get_message(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let message = state
        .message_service
        .find_by_id(id)
        .await?
        .ok_or(MarketplaceError::MessageNotFound { id })?;
    Ok(success(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.message_service.delete(id).await?;
    Ok(success(format!("消息 {id} 已删除")))
}
