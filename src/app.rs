use std::sync::Arc;

use anyhow::{Context, Result};
use manyworker_api::{auth::JwtService, create_routes, AppState};
use manyworker_application::{
    CategoryService, MessageService, ProfileService, TaskLifecycleService,
};
use manyworker_config::AppConfig;
use manyworker_infrastructure::DatabaseManager;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::info;

/// 主应用程序：装配存储、服务与 HTTP 路由
pub struct Application {
    config: AppConfig,
    database: DatabaseManager,
    state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self> {
        info!("初始化应用程序");

        let database = DatabaseManager::new(&config.database)
            .await
            .context("创建数据库连接池失败")?;

        sqlx::migrate!("./migrations")
            .run(database.pool())
            .await
            .context("执行数据库迁移失败")?;

        let directory = database.actor_directory();
        let task_repo = database.task_repository();
        let message_repo = database.message_repository();
        let category_repo = database.category_repository();
        let profile_repo = database.social_profile_repository();

        let state = AppState {
            task_service: Arc::new(TaskLifecycleService::new(
                task_repo.clone(),
                category_repo.clone(),
                directory.clone(),
            )),
            message_service: Arc::new(MessageService::new(
                message_repo,
                directory.clone(),
                config.messaging.broadcast_admin_only,
            )),
            category_service: Arc::new(CategoryService::new(category_repo, task_repo)),
            profile_service: Arc::new(ProfileService::new(profile_repo)),
            directory,
            jwt: Arc::new(JwtService::new(
                &config.api.auth.jwt_secret,
                config.api.auth.jwt_expiration_hours,
            )),
        };

        Ok(Self {
            config,
            database,
            state,
        })
    }

    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let app = create_routes(self.state.clone())
            .layer(manyworker_api::middleware::cors_layer())
            .layer(manyworker_api::middleware::trace_layer())
            .layer(axum::middleware::from_fn(
                manyworker_api::middleware::request_logging,
            ));

        let bind_address = &self.config.api.bind_address;
        let listener = TcpListener::bind(bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {bind_address}"))?;

        info!("API 服务器监听于 {bind_address}");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API 服务器开始关闭");
            })
            .await
            .context("API 服务器运行失败")?;

        self.database.close().await;
        info!("数据库连接池已关闭");
        Ok(())
    }
}
