use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use manyworker_domain::entities::Actor;
use manyworker_domain::repositories::ActorDirectory;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 参与者目录的 PostgreSQL 实现
///
/// 目录是只读的：参与者由外部注册流程维护。
pub struct PostgresActorDirectory {
    pool: PgPool,
}

impl PostgresActorDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_actor(row: &sqlx::postgres::PgRow) -> MarketplaceResult<Actor> {
        Ok(Actor {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            role: row.try_get("role")?,
        })
    }
}

#[async_trait]
impl ActorDirectory for PostgresActorDirectory {
    #[instrument(skip(self), fields(actor_id = %id))]
    async fn resolve(&self, id: i64) -> MarketplaceResult<Option<Actor>> {
        let row = sqlx::query("SELECT id, name, email, role FROM actors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        match row {
            Some(row) => {
                let actor = Self::row_to_actor(&row)?;
                debug!("解析参与者成功: {} ({:?})", actor.id, actor.role);
                Ok(Some(actor))
            }
            None => {
                debug!("参与者不存在: ID {id}");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> MarketplaceResult<Vec<Actor>> {
        let rows = sqlx::query("SELECT id, name, email, role FROM actors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        let actors: MarketplaceResult<Vec<Actor>> = rows.iter().map(Self::row_to_actor).collect();
        let actors = actors?;
        debug!("查询参与者列表成功，共 {} 个", actors.len());
        Ok(actors)
    }
}
