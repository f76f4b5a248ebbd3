use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use manyworker_domain::entities::Message;
use manyworker_domain::repositories::MessageRepository;
use manyworker_errors::{MarketplaceError, MarketplaceResult};

/// 消息仓储的 PostgreSQL 实现
///
/// 批量写入在单个事务中完成：广播要么全部落库，要么全部回滚。
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &sqlx::postgres::PgRow) -> MarketplaceResult<Message> {
        Ok(Message {
            id: row.try_get("id")?,
            sender_id: row.try_get("sender_id")?,
            recipient_id: row.try_get("recipient_id")?,
            sent_at: row.try_get("sent_at")?,
            subject: row.try_get("subject")?,
            body: row.try_get("body")?,
        })
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    #[instrument(skip(self, message), fields(sender_id = %message.sender_id, recipient_id = %message.recipient_id))]
    async fn create(&self, message: &Message) -> MarketplaceResult<Message> {
        let row = sqlx::query(
            r#"
            INSERT INTO messages (sender_id, recipient_id, sent_at, subject, body)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, sender_id, recipient_id, sent_at, subject, body
            "#,
        )
        .bind(message.sender_id)
        .bind(message.recipient_id)
        .bind(message.sent_at)
        .bind(&message.subject)
        .bind(&message.body)
        .fetch_one(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let created = Self::row_to_message(&row)?;
        debug!("写入消息成功: ID {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self, batch), fields(batch_size = %batch.len()))]
    async fn create_batch(&self, batch: &[Message]) -> MarketplaceResult<Vec<Message>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await.map_err(MarketplaceError::Database)?;

        let mut stored = Vec::with_capacity(batch.len());
        for message in batch {
            let row = sqlx::query(
                r#"
                INSERT INTO messages (sender_id, recipient_id, sent_at, subject, body)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, sender_id, recipient_id, sent_at, subject, body
                "#,
            )
            .bind(message.sender_id)
            .bind(message.recipient_id)
            .bind(message.sent_at)
            .bind(&message.subject)
            .bind(&message.body)
            .fetch_one(&mut *tx)
            .await
            .map_err(MarketplaceError::Database)?;

            stored.push(Self::row_to_message(&row)?);
        }

        tx.commit().await.map_err(MarketplaceError::Database)?;
        debug!("批量写入消息成功，共 {} 条", stored.len());
        Ok(stored)
    }

    #[instrument(skip(self), fields(message_id = %id))]
    async fn find_by_id(&self, id: i64) -> MarketplaceResult<Option<Message>> {
        let row = sqlx::query(
            "SELECT id, sender_id, recipient_id, sent_at, subject, body FROM messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_message(&row)?)),
            None => {
                debug!("查询消息不存在: ID {id}");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> MarketplaceResult<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT id, sender_id, recipient_id, sent_at, subject, body FROM messages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(MarketplaceError::Database)?;

        let messages: MarketplaceResult<Vec<Message>> =
            rows.iter().map(Self::row_to_message).collect();
        let messages = messages?;
        debug!("查询消息列表成功，共 {} 条", messages.len());
        Ok(messages)
    }

    #[instrument(skip(self), fields(message_id = %id))]
    async fn delete(&self, id: i64) -> MarketplaceResult<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(MarketplaceError::Database)?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::message_not_found(id));
        }

        debug!("删除消息成功: ID {id}");
        Ok(())
    }
}
