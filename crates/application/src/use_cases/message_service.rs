use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use manyworker_domain::entities::Message;
use manyworker_domain::repositories::{ActorDirectory, MessageRepository};
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 消息服务 - 参与者之间的点对点消息与广播扇出
pub struct MessageService {
    message_repo: Arc<dyn MessageRepository>,
    directory: Arc<dyn ActorDirectory>,
    /// 广播是否仅限管理员，对应配置项 `messaging.broadcast_admin_only`
    broadcast_admin_only: bool,
}

impl MessageService {
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        directory: Arc<dyn ActorDirectory>,
        broadcast_admin_only: bool,
    ) -> Self {
        Self {
            message_repo,
            directory,
            broadcast_admin_only,
        }
    }

    /// 在两个参与者之间发送一条消息
    ///
    /// 发送方和接收方都必须能在目录中解析，且不能相同。
    pub async fn send(
        &self,
        sender_id: i64,
        recipient_id: i64,
        subject: String,
        body: String,
    ) -> MarketplaceResult<Message> {
        let sender = self
            .directory
            .resolve(sender_id)
            .await?
            .ok_or_else(|| MarketplaceError::actor_not_found(sender_id))?;
        let recipient = self
            .directory
            .resolve(recipient_id)
            .await?
            .ok_or_else(|| MarketplaceError::actor_not_found(recipient_id))?;

        if sender.id == recipient.id {
            return Err(MarketplaceError::SelfMessage);
        }

        let message = Message::new(sender.id, recipient.id, Utc::now(), subject, body);
        let stored = self.message_repo.create(&message).await?;
        info!(
            "发送消息成功: {} -> {} (ID: {})",
            sender.id, recipient.id, stored.id
        );
        Ok(stored)
    }

    /// 向目录中除发送者以外的所有参与者广播一条消息
    ///
    /// 所有消息共享主题、正文和时间戳，按目录枚举顺序返回。
    /// 批量写入是原子的：部分失败不会留下已提交的子集。
    pub async fn broadcast(
        &self,
        sender_id: i64,
        subject: String,
        body: String,
    ) -> MarketplaceResult<Vec<Message>> {
        let sender = self
            .directory
            .resolve(sender_id)
            .await?
            .ok_or_else(|| MarketplaceError::actor_not_found(sender_id))?;

        if self.broadcast_admin_only && !sender.is_admin() {
            return Err(MarketplaceError::permission_denied(
                "只有管理员可以发送广播消息",
            ));
        }

        let sent_at = Utc::now();
        let messages: Vec<Message> = self
            .directory
            .find_all()
            .await?
            .into_iter()
            .filter(|recipient| recipient.id != sender.id)
            .map(|recipient| {
                Message::new(
                    sender.id,
                    recipient.id,
                    sent_at,
                    subject.clone(),
                    body.clone(),
                )
            })
            .collect();

        if messages.is_empty() {
            debug!("广播没有可投递的接收者: 发送者 {}", sender.id);
            return Ok(Vec::new());
        }

        let stored = self.message_repo.create_batch(&messages).await?;
        info!("广播消息成功: 发送者 {}, 共 {} 条", sender.id, stored.len());
        Ok(stored)
    }

    pub async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<Message>> {
        self.message_repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> MarketplaceResult<Vec<Message>> {
        self.message_repo.find_all().await
    }

    pub async fn delete(&self, id: i64) -> MarketplaceResult<()> {
        self.message_repo.delete(id).await?;
        info!("删除消息成功: {id}");
        Ok(())
    }
}
