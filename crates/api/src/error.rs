use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use manyworker_errors::MarketplaceError;
use serde_json::json;

use crate::auth::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("市场错误: {0}")]
    Marketplace(#[from] MarketplaceError),

    #[error("认证错误: {0}")]
    Authentication(#[from] AuthError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("内部服务器错误: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type, suggestions) = match &self {
            ApiError::Marketplace(MarketplaceError::TaskNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("任务 {id} 不存在"),
                "TASK_NOT_FOUND".to_string(),
                vec![
                    "请检查任务ID是否正确".to_string(),
                    "使用 GET /tareas 查看所有任务".to_string(),
                ],
            ),
            ApiError::Marketplace(MarketplaceError::ActorNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("参与者 {id} 不存在"),
                "ACTOR_NOT_FOUND".to_string(),
                vec!["请检查参与者ID是否正确".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::MessageNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("消息 {id} 不存在"),
                "MESSAGE_NOT_FOUND".to_string(),
                vec!["使用 GET /mensajes 查看所有消息".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::CategoryNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("分类 {id} 不存在"),
                "CATEGORY_NOT_FOUND".to_string(),
                vec!["使用 GET /categorias 查看所有分类".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::ProfileNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("社交档案 {id} 不存在"),
                "PROFILE_NOT_FOUND".to_string(),
                vec!["使用 GET /perfiles 查看所有档案".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::CategoryInUse { id }) => (
                StatusCode::CONFLICT,
                format!("分类 {id} 仍被任务引用，无法删除"),
                "CATEGORY_IN_USE".to_string(),
                vec!["请先删除或迁移引用该分类的任务".to_string()],
            ),
            ApiError::Marketplace(
                err @ (MarketplaceError::InvalidDescription
                | MarketplaceError::InvalidCategory(_)
                | MarketplaceError::InvalidPrice(_)
                | MarketplaceError::SelfMessage
                | MarketplaceError::ValidationError(_)),
            ) => (
                StatusCode::BAD_REQUEST,
                err.user_message().to_string(),
                "VALIDATION_ERROR".to_string(),
                vec!["请检查请求参数是否符合要求".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::Permission(msg)) => (
                StatusCode::FORBIDDEN,
                msg.clone(),
                "FORBIDDEN".to_string(),
                vec!["您没有执行此操作的权限".to_string()],
            ),
            ApiError::Marketplace(MarketplaceError::Unauthenticated) => (
                StatusCode::UNAUTHORIZED,
                "未认证".to_string(),
                "UNAUTHENTICATED".to_string(),
                vec!["请在请求头中添加 Authorization: Bearer <token>".to_string()],
            ),
            ApiError::Authentication(auth_error) => (
                StatusCode::UNAUTHORIZED,
                auth_error.to_string(),
                "UNAUTHENTICATED".to_string(),
                vec!["请在请求头中添加 Authorization: Bearer <token>".to_string()],
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数错误: {msg}"),
                "BAD_REQUEST".to_string(),
                vec!["请检查请求格式和参数".to_string()],
            ),
            ApiError::Marketplace(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR".to_string(),
                vec!["系统遇到内部错误，请稍后重试".to_string()],
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR".to_string(),
                vec![format!("错误详情: {msg}")],
            ),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_maps_to_404() {
        let error = ApiError::Marketplace(MarketplaceError::task_not_found("abc"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let cases = vec![
            MarketplaceError::InvalidDescription,
            MarketplaceError::InvalidCategory("x".to_string()),
            MarketplaceError::InvalidPrice(-1.0),
            MarketplaceError::SelfMessage,
            MarketplaceError::validation_error("campo"),
        ];
        for case in cases {
            let response = ApiError::Marketplace(case).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_permission_maps_to_403() {
        let error = ApiError::Marketplace(MarketplaceError::permission_denied("no"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_auth_error_maps_to_401() {
        let error = ApiError::Authentication(AuthError::MissingToken);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_category_in_use_maps_to_409() {
        let error = ApiError::Marketplace(MarketplaceError::category_in_use("hogar"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let error = ApiError::Marketplace(MarketplaceError::database_error("down"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = ApiError::BadRequest("id en blanco".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
