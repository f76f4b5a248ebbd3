//! 基础设施层 - PostgreSQL 仓储实现与连接池管理

pub mod database;

pub use database::manager::DatabaseManager;
pub use database::postgres::{
    PostgresActorDirectory, PostgresCategoryRepository, PostgresMessageRepository,
    PostgresSocialProfileRepository, PostgresTaskRepository,
};
