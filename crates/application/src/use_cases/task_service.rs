use std::sync::Arc;

use tracing::{debug, info};

use manyworker_domain::entities::{Task, TaskDraft, TaskPatch};
use manyworker_domain::repositories::{ActorDirectory, CategoryRepository, TaskRepository};
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 任务生命周期服务 - 负责任务的校验、创建与变更
///
/// 拥有者在创建时确定，此后不可变；更新只替换描述、地址、价格、
/// 截止日期和类别。
pub struct TaskLifecycleService {
    task_repo: Arc<dyn TaskRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    directory: Arc<dyn ActorDirectory>,
}

impl TaskLifecycleService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        directory: Arc<dyn ActorDirectory>,
    ) -> Self {
        Self {
            task_repo,
            category_repo,
            directory,
        }
    }

    /// 以指定客户为拥有者创建任务
    ///
    /// 校验按顺序执行：拥有者必须是客户角色，描述非空，类别存在，
    /// 最高价格为正。任一校验失败都不会写入存储。
    pub async fn create(&self, owner_id: i64, draft: TaskDraft) -> MarketplaceResult<Task> {
        let owner = self
            .directory
            .resolve(owner_id)
            .await?
            .filter(|actor| actor.is_client())
            .ok_or_else(|| MarketplaceError::permission_denied("只有客户可以创建任务"))?;

        self.validate_fields(&draft.description, &draft.category_id, draft.max_price)
            .await?;

        let task = Task::from_draft(draft, owner.id);
        let created = self.task_repo.create(&task).await?;
        info!("创建任务成功: {} (拥有者: {})", created.id, owner.id);
        Ok(created)
    }

    pub async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Task>> {
        self.task_repo.find_by_id(id).await
    }

    /// 每次调用都是一次全新的存储读取
    pub async fn find_all(&self) -> MarketplaceResult<Vec<Task>> {
        self.task_repo.find_all().await
    }

    /// 替换任务的可变字段，拥有者保持不变
    ///
    /// 变更接受与创建相同的字段校验，已持久化的任务始终保持
    /// 描述非空、价格为正。目标不存在（包括与删除竞争的情形）
    /// 返回 `TaskNotFound`，不会复活已删除的记录。
    pub async fn update(&self, id: &str, patch: TaskPatch) -> MarketplaceResult<Task> {
        self.validate_fields(&patch.description, &patch.category_id, patch.max_price)
            .await?;

        let mut task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::task_not_found(id))?;

        task.apply_patch(patch);
        self.task_repo.update(&task).await?;
        debug!("更新任务成功: {}", task.id);
        Ok(task)
    }

    pub async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        self.task_repo.delete(id).await?;
        info!("删除任务成功: {id}");
        Ok(())
    }

    /// 创建与更新共用的字段校验：描述非空、类别存在、价格为正
    async fn validate_fields(
        &self,
        description: &str,
        category_id: &str,
        max_price: f64,
    ) -> MarketplaceResult<()> {
        if description.trim().is_empty() {
            return Err(MarketplaceError::InvalidDescription);
        }
        if category_id.trim().is_empty() || !self.category_repo.exists(category_id).await? {
            return Err(MarketplaceError::InvalidCategory(category_id.to_string()));
        }
        if !(max_price > 0.0) {
            return Err(MarketplaceError::InvalidPrice(max_price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manyworker_testing_utils::builders::{
        ActorBuilder, CategoryBuilder, TaskBuilder, TaskDraftBuilder,
    };
    use manyworker_testing_utils::mocks::{
        MockActorDirectory, MockCategoryRepository, MockTaskRepository,
    };

    fn service_with(
        task_repo: MockTaskRepository,
        category_repo: MockCategoryRepository,
        directory: MockActorDirectory,
    ) -> TaskLifecycleService {
        TaskLifecycleService::new(
            Arc::new(task_repo),
            Arc::new(category_repo),
            Arc::new(directory),
        )
    }

    fn default_fixture() -> (MockTaskRepository, MockCategoryRepository, MockActorDirectory) {
        let task_repo = MockTaskRepository::new();
        let category_repo =
            MockCategoryRepository::with_categories(vec![CategoryBuilder::new().build()]);
        let directory = MockActorDirectory::with_actors(vec![
            ActorBuilder::new().with_id(1).client().build(),
            ActorBuilder::new().with_id(2).worker().build(),
        ]);
        (task_repo, category_repo, directory)
    }

    #[tokio::test]
    async fn test_create_assigns_owner_and_persists() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        let task = service
            .create(1, TaskDraftBuilder::new().build())
            .await
            .expect("创建任务应当成功");

        assert_eq!(task.client_id, 1);
        assert!(!task.id.is_empty());
        assert_eq!(task_repo.count(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_non_client_owner() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        // 参与者2是工作者
        let result = service.create(2, TaskDraftBuilder::new().build()).await;
        assert!(matches!(result, Err(MarketplaceError::Permission(_))));
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_owner() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        let result = service.create(99, TaskDraftBuilder::new().build()).await;
        assert!(matches!(result, Err(MarketplaceError::Permission(_))));
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_description() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        let draft = TaskDraftBuilder::new().with_description("   ").build();
        let result = service.create(1, draft).await;
        assert!(matches!(result, Err(MarketplaceError::InvalidDescription)));
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_category() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        let draft = TaskDraftBuilder::new().with_category("inexistente").build();
        let result = service.create(1, draft).await;
        assert!(matches!(result, Err(MarketplaceError::InvalidCategory(_))));
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        for price in [0.0, -10.0] {
            let draft = TaskDraftBuilder::new().with_max_price(price).build();
            let result = service.create(1, draft).await;
            assert!(matches!(result, Err(MarketplaceError::InvalidPrice(_))));
        }
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_not_owner() {
        let (_, category_repo, directory) = default_fixture();
        let existing = TaskBuilder::new().with_id("t-1").owned_by(1).build();
        let task_repo = MockTaskRepository::with_tasks(vec![existing]);
        let service = service_with(task_repo.clone(), category_repo, directory);

        let patch = TaskPatch {
            description: "Montar armario".to_string(),
            address: Some("Av. Libertad 5".to_string()),
            max_price: 75.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let updated = service.update("t-1", patch).await.expect("更新应当成功");

        assert_eq!(updated.description, "Montar armario");
        assert_eq!(updated.max_price, 75.0);
        assert_eq!(updated.client_id, 1);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_noop() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        let patch = TaskPatch {
            description: "Montar armario".to_string(),
            address: None,
            max_price: 75.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let result = service.update("no-existe", patch).await;

        assert!(matches!(result, Err(MarketplaceError::TaskNotFound { .. })));
        assert_eq!(task_repo.count(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_fields() {
        let (_, category_repo, directory) = default_fixture();
        let existing = TaskBuilder::new()
            .with_id("t-1")
            .with_description("Montar estantería")
            .with_max_price(50.0)
            .owned_by(1)
            .build();
        let task_repo = MockTaskRepository::with_tasks(vec![existing]);
        let service = service_with(task_repo.clone(), category_repo, directory);

        // 空描述加负价格，更新应当整体拒绝
        let patch = TaskPatch {
            description: "   ".to_string(),
            address: None,
            max_price: -50.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let result = service.update("t-1", patch).await;
        assert!(matches!(result, Err(MarketplaceError::InvalidDescription)));

        let patch = TaskPatch {
            description: "Montar armario".to_string(),
            address: None,
            max_price: -50.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let result = service.update("t-1", patch).await;
        assert!(matches!(result, Err(MarketplaceError::InvalidPrice(_))));

        let patch = TaskPatch {
            description: "Montar armario".to_string(),
            address: None,
            max_price: 60.0,
            end_date: None,
            category_id: "inexistente".to_string(),
        };
        let result = service.update("t-1", patch).await;
        assert!(matches!(result, Err(MarketplaceError::InvalidCategory(_))));

        // 存储中的任务保持原样
        let stored = service
            .find_by_id("t-1")
            .await
            .expect("查询应当成功")
            .expect("任务应当存在");
        assert_eq!(stored.description, "Montar estantería");
        assert_eq!(stored.max_price, 50.0);
    }

    #[tokio::test]
    async fn test_delete_missing_task_returns_not_found() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo, category_repo, directory);

        let result = service.delete("no-existe").await;
        assert!(matches!(result, Err(MarketplaceError::TaskNotFound { .. })));
    }

    #[tokio::test]
    async fn test_find_all_is_fresh_read() {
        let (task_repo, category_repo, directory) = default_fixture();
        let service = service_with(task_repo.clone(), category_repo, directory);

        assert!(service.find_all().await.expect("查询应当成功").is_empty());

        service
            .create(1, TaskDraftBuilder::new().build())
            .await
            .expect("创建任务应当成功");

        // 再次调用反映最新状态
        assert_eq!(service.find_all().await.expect("查询应当成功").len(), 1);
    }
}
