use std::sync::Arc;

use tracing::info;

use manyworker_domain::entities::{Category, CategoryPatch};
use manyworker_domain::repositories::{CategoryRepository, TaskRepository};
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 分类服务 - 任务分类的维护
///
/// 删除受引用保护：仍被任务引用的分类不能删除。
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl CategoryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        task_repo: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            category_repo,
            task_repo,
        }
    }

    pub async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Category>> {
        self.category_repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> MarketplaceResult<Vec<Category>> {
        self.category_repo.find_all().await
    }

    pub async fn create(&self, category: Category) -> MarketplaceResult<Category> {
        if category.id.trim().is_empty() {
            return Err(MarketplaceError::validation_error("分类 ID 不能为空"));
        }
        let stored = self.category_repo.create(&category).await?;
        info!("创建分类成功: {}", stored.id);
        Ok(stored)
    }

    pub async fn update(&self, id: &str, patch: CategoryPatch) -> MarketplaceResult<Category> {
        let mut category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::category_not_found(id))?;

        category.apply_patch(patch);
        self.category_repo.update(&category).await?;
        info!("更新分类成功: {id}");
        Ok(category)
    }

    /// 删除分类；若仍有任务引用该分类则拒绝
    pub async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        if self.task_repo.exists_by_category(id).await? {
            return Err(MarketplaceError::category_in_use(id));
        }
        self.category_repo.delete(id).await?;
        info!("删除分类成功: {id}");
        Ok(())
    }
}
