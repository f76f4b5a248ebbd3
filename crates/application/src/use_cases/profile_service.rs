use std::sync::Arc;

use tracing::info;

use manyworker_domain::entities::{Actor, SocialProfile, SocialProfilePatch};
use manyworker_domain::repositories::SocialProfileRepository;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 社交档案服务
///
/// 修改和删除只允许档案的拥有者执行。
pub struct ProfileService {
    profile_repo: Arc<dyn SocialProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn SocialProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<SocialProfile>> {
        self.profile_repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> MarketplaceResult<Vec<SocialProfile>> {
        self.profile_repo.find_all().await
    }

    /// 创建档案，拥有者固定为当前参与者
    pub async fn create(
        &self,
        acting: &Actor,
        nickname: String,
        network: String,
        link: String,
    ) -> MarketplaceResult<SocialProfile> {
        if nickname.trim().is_empty() {
            return Err(MarketplaceError::validation_error("昵称不能为空"));
        }
        let profile = SocialProfile {
            id: 0, // 将由数据库生成
            actor_id: acting.id,
            nickname,
            network,
            link,
        };
        let stored = self.profile_repo.create(&profile).await?;
        info!("创建社交档案成功: {} (拥有者 {})", stored.id, acting.id);
        Ok(stored)
    }

    pub async fn update(
        &self,
        acting: &Actor,
        id: i64,
        patch: SocialProfilePatch,
    ) -> MarketplaceResult<SocialProfile> {
        let mut profile = self
            .profile_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::profile_not_found(id))?;

        if !profile.is_owned_by(acting) {
            return Err(MarketplaceError::permission_denied(
                "没有权限修改他人的社交档案",
            ));
        }

        profile.apply_patch(patch);
        self.profile_repo.update(&profile).await?;
        info!("更新社交档案成功: {id}");
        Ok(profile)
    }

    pub async fn delete(&self, acting: &Actor, id: i64) -> MarketplaceResult<()> {
        let profile = self
            .profile_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::profile_not_found(id))?;

        if !profile.is_owned_by(acting) {
            return Err(MarketplaceError::permission_denied(
                "没有权限删除他人的社交档案",
            ));
        }

        self.profile_repo.delete(id).await?;
        info!("删除社交档案成功: {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manyworker_testing_utils::builders::{ActorBuilder, SocialProfileBuilder};
    use manyworker_testing_utils::mocks::MockSocialProfileRepository;

    fn owner() -> Actor {
        ActorBuilder::new().with_id(5).client().build()
    }

    fn stranger() -> Actor {
        ActorBuilder::new().with_id(9).worker().build()
    }

    fn patch() -> SocialProfilePatch {
        SocialProfilePatch {
            nickname: "maria_fix".to_string(),
            network: "instagram".to_string(),
            link: "https://instagram.com/maria_fix".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_acting_actor_as_owner() {
        let repo = MockSocialProfileRepository::new();
        let service = ProfileService::new(Arc::new(repo.clone()));

        let profile = service
            .create(
                &owner(),
                "maria".to_string(),
                "twitter".to_string(),
                "https://twitter.com/maria".to_string(),
            )
            .await
            .expect("创建应当成功");

        assert_eq!(profile.actor_id, 5);
        assert!(profile.id > 0);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_nickname() {
        let service = ProfileService::new(Arc::new(MockSocialProfileRepository::new()));

        let result = service
            .create(&owner(), "  ".to_string(), "twitter".to_string(), String::new())
            .await;
        assert!(matches!(result, Err(MarketplaceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_owner_can_update() {
        let repo = MockSocialProfileRepository::with_profiles(vec![
            SocialProfileBuilder::new().with_id(1).owned_by(5).build(),
        ]);
        let service = ProfileService::new(Arc::new(repo));

        let updated = service
            .update(&owner(), 1, patch())
            .await
            .expect("拥有者更新应当成功");
        assert_eq!(updated.nickname, "maria_fix");
        assert_eq!(updated.actor_id, 5);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update() {
        let repo = MockSocialProfileRepository::with_profiles(vec![
            SocialProfileBuilder::new().with_id(1).owned_by(5).build(),
        ]);
        let service = ProfileService::new(Arc::new(repo));

        let result = service.update(&stranger(), 1, patch()).await;
        assert!(matches!(result, Err(MarketplaceError::Permission(_))));
    }

    #[tokio::test]
    async fn test_owner_can_delete() {
        let repo = MockSocialProfileRepository::with_profiles(vec![
            SocialProfileBuilder::new().with_id(1).owned_by(5).build(),
        ]);
        let service = ProfileService::new(Arc::new(repo.clone()));

        service.delete(&owner(), 1).await.expect("拥有者删除应当成功");
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_delete() {
        let repo = MockSocialProfileRepository::with_profiles(vec![
            SocialProfileBuilder::new().with_id(1).owned_by(5).build(),
        ]);
        let service = ProfileService::new(Arc::new(repo.clone()));

        let result = service.delete(&stranger(), 1).await;
        assert!(matches!(result, Err(MarketplaceError::Permission(_))));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_profile() {
        let service = ProfileService::new(Arc::new(MockSocialProfileRepository::new()));

        let result = service.delete(&owner(), 42).await;
        assert!(matches!(
            result,
            Err(MarketplaceError::ProfileNotFound { id: 42 })
        ));
    }
}
