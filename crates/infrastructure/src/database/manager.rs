use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use manyworker_config::DatabaseConfig;
use manyworker_domain::repositories::{
    ActorDirectory, CategoryRepository, MessageRepository, SocialProfileRepository, TaskRepository,
};
use manyworker_errors::{MarketplaceError, MarketplaceResult};

use super::postgres::{
    PostgresActorDirectory, PostgresCategoryRepository, PostgresMessageRepository,
    PostgresSocialProfileRepository, PostgresTaskRepository,
};

/// 数据库管理器 - 持有连接池并负责构造各仓储
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 按配置建立 PostgreSQL 连接池
    pub async fn new(config: &DatabaseConfig) -> MarketplaceResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(MarketplaceError::Database)?;

        info!(
            "数据库连接池建立成功 (最大连接数: {})",
            config.max_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> MarketplaceResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn actor_directory(&self) -> Arc<dyn ActorDirectory> {
        Arc::new(PostgresActorDirectory::new(self.pool.clone()))
    }

    pub fn task_repository(&self) -> Arc<dyn TaskRepository> {
        Arc::new(PostgresTaskRepository::new(self.pool.clone()))
    }

    pub fn message_repository(&self) -> Arc<dyn MessageRepository> {
        Arc::new(PostgresMessageRepository::new(self.pool.clone()))
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(PostgresCategoryRepository::new(self.pool.clone()))
    }

    pub fn social_profile_repository(&self) -> Arc<dyn SocialProfileRepository> {
        Arc::new(PostgresSocialProfileRepository::new(self.pool.clone()))
    }
}
