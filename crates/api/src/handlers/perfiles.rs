use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use manyworker_domain::entities::SocialProfilePatch;
use manyworker_errors::MarketplaceError;

use crate::auth::CurrentActor;
use crate::error::ApiResult;
use crate::response::{created, no_content, success};
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub nickname: String,
    pub network: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub nickname: String,
    pub network: String,
    pub link: String,
}

pub async fn list_profiles(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> ApiResult<axum::response::Response> {
    let profiles = state.profile_service.find_all().await?;
    if profiles.is_empty() {
        return Ok(no_content().into_response());
    }
    Ok(success(profiles).into_response())
}

pub async fn get_profile(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let profile = state
        .profile_service
        .find_by_id(id)
        .await?
        .ok_or(MarketplaceError::ProfileNotFound { id })?;
    Ok(success(profile))
}

pub async fn create_profile(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(request): Json<CreateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    let profile = state
        .profile_service
        .create(&actor, request.nickname, request.network, request.link)
        .await?;
    Ok(created(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    let patch = SocialProfilePatch {
        nickname: request.nickname,
        network: request.network,
        link: request.link,
    };
    let profile = state.profile_service.update(&actor, id, patch).await?;
    Ok(success(profile))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.profile_service.delete(&actor, id).await?;
    Ok(success(format!("社交档案 {id} 已删除")))
}
