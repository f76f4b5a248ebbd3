use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use manyworker_domain::entities::Category;
use manyworker_domain::repositories::CategoryRepository;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 分类仓储的 PostgreSQL 实现
///
/// `applicable_laws` 以 JSONB 存储。
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &sqlx::postgres::PgRow) -> MarketplaceResult<Category> {
        let laws: serde_json::Value = row.try_get("applicable_laws")?;
        let applicable_laws = serde_json::from_value(laws)
            .map_err(|e| MarketplaceError::Serialization(format!("解析适用法规失败: {e}")))?;

        Ok(Category {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            applicable_laws,
        })
    }

    fn laws_to_json(category: &Category) -> MarketplaceResult<serde_json::Value> {
        serde_json::to_value(&category.applicable_laws)
            .map_err(|e| MarketplaceError::Serialization(format!("序列化适用法规失败: {e}")))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn create(&self, category: &Category) -> MarketplaceResult<Category> {
        let laws = Self::laws_to_json(category)?;

        let row = sqlx::query(
            r#"
            INSERT INTO categories (id, title, applicable_laws)
            VALUES ($1, $2, $3)
            RETURNING id, title, applicable_laws
            "#,
        )
        .bind(&category.id)
        .bind(&category.title)
        .bind(laws)
        .fetch_one(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let created = Self::row_to_category(&row)?;
        debug!("创建分类成功: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Category>> {
        let row = sqlx::query("SELECT id, title, applicable_laws FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => {
                debug!("查询分类不存在: ID {id}");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> MarketplaceResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, title, applicable_laws FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        let categories: MarketplaceResult<Vec<Category>> =
            rows.iter().map(Self::row_to_category).collect();
        let categories = categories?;
        debug!("查询分类列表成功，共 {} 个", categories.len());
        Ok(categories)
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn update(&self, category: &Category) -> MarketplaceResult<()> {
        let laws = Self::laws_to_json(category)?;

        let result = sqlx::query(
            "UPDATE categories SET title = $2, applicable_laws = $3 WHERE id = $1",
        )
        .bind(&category.id)
        .bind(&category.title)
        .bind(laws)
        .execute(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::category_not_found(category.id.clone()));
        }

        debug!("更新分类成功: {}", category.id);
        Ok(())
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::category_not_found(id));
        }

        debug!("删除分类成功: ID {id}");
        Ok(())
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn exists(&self, id: &str) -> MarketplaceResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1) AS present")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        Ok(row.try_get("present")?)
    }
}
