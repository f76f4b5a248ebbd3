use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use manyworker_domain::entities::Task;
use manyworker_domain::repositories::TaskRepository;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 任务仓储的 PostgreSQL 实现
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::postgres::PgRow) -> MarketplaceResult<Task> {
        Ok(Task {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            max_price: row.try_get("max_price")?,
            end_date: row.try_get("end_date")?,
            category_id: row.try_get("category_id")?,
            client_id: row.try_get("client_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[instrument(skip(self, task), fields(task_id = %task.id, client_id = %task.client_id))]
    async fn create(&self, task: &Task) -> MarketplaceResult<Task> {
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (id, description, address, max_price, end_date, category_id, client_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, description, address, max_price, end_date, category_id, client_id, created_at, updated_at
            "#,
        )
        .bind(&task.id)
        .bind(&task.description)
        .bind(&task.address)
        .bind(task.max_price)
        .bind(task.end_date)
        .bind(&task.category_id)
        .bind(task.client_id)
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let created = Self::row_to_task(&row)?;
        debug!("创建任务成功: {}", created.entity_description());
        Ok(created)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn find_by_id(&self, id: &str) -> MarketplaceResult<Option<Task>> {
        let row = sqlx::query(
            "SELECT id, description, address, max_price, end_date, category_id, client_id, created_at, updated_at FROM tasks WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        match row {
            Some(row) => {
                let task = Self::row_to_task(&row)?;
                debug!("查询任务成功: {}", task.entity_description());
                Ok(Some(task))
            }
            None => {
                debug!("查询任务不存在: ID {id}");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> MarketplaceResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, description, address, max_price, end_date, category_id, client_id, created_at, updated_at FROM tasks ORDER BY created_at"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let tasks: MarketplaceResult<Vec<Task>> = rows.iter().map(Self::row_to_task).collect();
        let tasks = tasks?;
        debug!("查询任务列表成功，共 {} 个", tasks.len());
        Ok(tasks)
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn update(&self, task: &Task) -> MarketplaceResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET description = $2, address = $3, max_price = $4, end_date = $5,
                category_id = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(&task.id)
        .bind(&task.description)
        .bind(&task.address)
        .bind(task.max_price)
        .bind(task.end_date)
        .bind(&task.category_id)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::task_not_found(task.id.clone()));
        }

        debug!("更新任务成功: {}", task.entity_description());
        Ok(())
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn delete(&self, id: &str) -> MarketplaceResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::task_not_found(id));
        }

        debug!("删除任务成功: ID {id}");
        Ok(())
    }

    #[instrument(skip(self), fields(category_id = %category_id))]
    async fn exists_by_category(&self, category_id: &str) -> MarketplaceResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM tasks WHERE category_id = $1) AS present")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        Ok(row.try_get("present")?)
    }
}
