use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use manyworker_domain::entities::SocialProfile;
use manyworker_domain::repositories::SocialProfileRepository;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 社交档案仓储的 PostgreSQL 实现
pub struct PostgresSocialProfileRepository {
    pool: PgPool,
}

impl PostgresSocialProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::postgres::PgRow) -> MarketplaceResult<SocialProfile> {
        Ok(SocialProfile {
            id: row.try_get("id")?,
            actor_id: row.try_get("actor_id")?,
            nickname: row.try_get("nickname")?,
            network: row.try_get("network")?,
            link: row.try_get("link")?,
        })
    }
}

#[async_trait]
impl SocialProfileRepository for PostgresSocialProfileRepository {
    #[instrument(skip(self, profile), fields(actor_id = %profile.actor_id))]
    async fn create(&self, profile: &SocialProfile) -> MarketplaceResult<SocialProfile> {
        let row = sqlx::query(
            r#"
            INSERT INTO social_profiles (actor_id, nickname, network, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, actor_id, nickname, network, link
            "#,
        )
        .bind(profile.actor_id)
        .bind(&profile.nickname)
        .bind(&profile.network)
        .bind(&profile.link)
        .fetch_one(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let created = Self::row_to_profile(&row)?;
        debug!("创建社交档案成功: ID {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self), fields(profile_id = %id))]
    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<SocialProfile>> {
        let row = sqlx::query(
            "SELECT id, actor_id, nickname, network, link FROM social_profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => {
                debug!("查询社交档案不存在: ID {id}");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> MarketplaceResult<Vec<SocialProfile>> {
        let rows = sqlx::query(
            "SELECT id, actor_id, nickname, network, link FROM social_profiles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let profiles: MarketplaceResult<Vec<SocialProfile>> =
            rows.iter().map(Self::row_to_profile).collect();
        let profiles = profiles?;
        debug!("查询社交档案列表成功，共 {} 个", profiles.len());
        Ok(profiles)
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &SocialProfile) -> MarketplaceResult<()> {
        let result = sqlx::query(
            "UPDATE social_profiles SET nickname = $2, network = $3, link = $4 WHERE id = $1",
        )
        .bind(profile.id)
        .bind(&profile.nickname)
        .bind(&profile.network)
        .bind(&profile.link)
        .execute(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::profile_not_found(profile.id));
        }

        debug!("更新社交档案成功: ID {}", profile.id);
        Ok(())
    }

    #[instrument(skip(self), fields(profile_id = %id))]
    async fn delete(&self, id: i64) -> MarketplaceResult<()> {
        let result = sqlx::query("DELETE FROM social_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::profile_not_found(id));
        }

        debug!("删除社交档案成功: ID {id}");
        Ok(())
    }
}
