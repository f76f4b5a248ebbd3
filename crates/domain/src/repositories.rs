//! 领域仓储抽象
//!
//! 定义数据访问的抽象接口，遵循依赖倒置原则

use async_trait::async_trait;

use crate::entities::{Actor, Category, Message, SocialProfile, Task};
use manyworker_errors::MarketplaceResult;

/// 参与者目录抽象
///
/// 按标识解析参与者并枚举全部参与者，broadcast 按此枚举顺序投递。
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    async fn resolve(&self, id: i64) -> MarketplaceResult<Option<Actor>>;
    async fn find_all(&self) -> MarketplaceResult<Vec<Actor>>;
}

/// 任务仓储抽象
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &Task) -> MarketplaceResult<Task>;
    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Task>>;
    async fn find_all(&self) -> MarketplaceResult<Vec<Task>>;
    /// 按 id 整体替换，目标不存在时返回 `TaskNotFound`
    async fn update(&self, task: &Task) -> MarketplaceResult<()>;
    async fn delete(&self, id: &str) -> MarketplaceResult<()>;
    async fn exists_by_category(&self, category_id: &str) -> MarketplaceResult<bool>;
}

/// 消息仓储抽象
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &Message) -> MarketplaceResult<Message>;
    /// 批量持久化，必须原子提交：部分失败不得留下已提交子集
    async fn create_batch(&self, messages: &[Message]) -> MarketplaceResult<Vec<Message>>;
    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<Message>>;
    async fn find_all(&self) -> MarketplaceResult<Vec<Message>>;
    async fn delete(&self, id: i64) -> MarketplaceResult<()>;
}

/// 类别仓储抽象
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> MarketplaceResult<Category>;
    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Category>>;
    async fn find_all(&self) -> MarketplaceResult<Vec<Category>>;
    async fn update(&self, category: &Category) -> MarketplaceResult<()>;
    async fn delete(&self, id: &str) -> MarketplaceResult<()>;
    async fn exists(&self, id: &str) -> MarketplaceResult<bool>;
}

/// 社交档案仓储抽象
#[async_trait]
pub trait SocialProfileRepository: Send + Sync {
    async fn create(&self, profile: &SocialProfile) -> MarketplaceResult<SocialProfile>;
    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<SocialProfile>>;
    async fn find_all(&self) -> MarketplaceResult<Vec<SocialProfile>>;
    async fn update(&self, profile: &SocialProfile) -> MarketplaceResult<()>;
    async fn delete(&self, id: i64) -> MarketplaceResult<()>;
}
