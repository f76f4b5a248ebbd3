use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use manyworker_application::{CategoryService, MessageService, ProfileService, TaskLifecycleService};
use manyworker_domain::repositories::ActorDirectory;

use crate::auth::{auth_middleware, JwtService};
use crate::handlers::{
    categorias::{create_category, delete_category, list_categories, update_category},
    health::health_check,
    mensajes::{broadcast_message, delete_message, get_message, list_messages, send_message},
    perfiles::{create_profile, delete_profile, get_profile, list_profiles, update_profile},
    tareas::{create_task, delete_task, get_task, list_tasks, update_task},
};

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    pub task_service: Arc<TaskLifecycleService>,
    pub message_service: Arc<MessageService>,
    pub category_service: Arc<CategoryService>,
    pub profile_service: Arc<ProfileService>,
    pub directory: Arc<dyn ActorDirectory>,
    pub jwt: Arc<JwtService>,
}

/// 创建 API 路由，除 /health 外全部要求 Bearer 认证
pub fn create_routes(state: AppState) -> Router {
    let protected = Router::new()
        // 任务
        .route("/tareas", get(list_tasks).post(create_task))
        .route(
            "/tareas/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        // 消息
        .route("/mensajes", get(list_messages).post(send_message))
        .route("/mensajes/broadcast", post(broadcast_message))
        .route("/mensajes/{id}", get(get_message).delete(delete_message))
        // 分类
        .route("/categorias", get(list_categories).post(create_category))
        .route(
            "/categorias/{id}",
            put(update_category).delete(delete_category),
        )
        // 社交档案
        .route("/perfiles", get(list_profiles).post(create_profile))
        .route(
            "/perfiles/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected)
        .with_state(state)
}
