use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("数据库操作错误: {0}")]
    DatabaseOperation(String),
    #[error("任务未找到: {id}")]
    TaskNotFound { id: String },
    #[error("参与者未找到: {id}")]
    ActorNotFound { id: i64 },
    #[error("消息未找到: {id}")]
    MessageNotFound { id: i64 },
    #[error("类别未找到: {id}")]
    CategoryNotFound { id: String },
    #[error("社交档案未找到: {id}")]
    ProfileNotFound { id: i64 },
    #[error("类别 {id} 仍被任务引用，无法删除")]
    CategoryInUse { id: String },
    #[error("任务描述不能为空")]
    InvalidDescription,
    #[error("任务类别无效: {0}")]
    InvalidCategory(String),
    #[error("最高价格必须大于0: {0}")]
    InvalidPrice(f64),
    #[error("不能给自己发送消息")]
    SelfMessage,
    #[error("数据验证失败: {0}")]
    ValidationError(String),
    #[error("权限不足: {0}")]
    Permission(String),
    #[error("未认证的请求")]
    Unauthenticated,
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

impl MarketplaceError {
    pub fn database_error<S: Into<String>>(msg: S) -> Self {
        Self::DatabaseOperation(msg.into())
    }
    pub fn task_not_found<S: Into<String>>(id: S) -> Self {
        Self::TaskNotFound { id: id.into() }
    }
    pub fn actor_not_found(id: i64) -> Self {
        Self::ActorNotFound { id }
    }
    pub fn message_not_found(id: i64) -> Self {
        Self::MessageNotFound { id }
    }
    pub fn category_not_found<S: Into<String>>(id: S) -> Self {
        Self::CategoryNotFound { id: id.into() }
    }
    pub fn profile_not_found(id: i64) -> Self {
        Self::ProfileNotFound { id }
    }
    pub fn category_in_use<S: Into<String>>(id: S) -> Self {
        Self::CategoryInUse { id: id.into() }
    }
    pub fn permission_denied<S: Into<String>>(msg: S) -> Self {
        Self::Permission(msg.into())
    }
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// 错误是否属于资源不存在一类
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MarketplaceError::TaskNotFound { .. }
                | MarketplaceError::ActorNotFound { .. }
                | MarketplaceError::MessageNotFound { .. }
                | MarketplaceError::CategoryNotFound { .. }
                | MarketplaceError::ProfileNotFound { .. }
        )
    }

    /// 错误是否由调用方输入导致
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MarketplaceError::InvalidDescription
                | MarketplaceError::InvalidCategory(_)
                | MarketplaceError::InvalidPrice(_)
                | MarketplaceError::SelfMessage
                | MarketplaceError::ValidationError(_)
        )
    }

    pub fn user_message(&self) -> &str {
        match self {
            MarketplaceError::TaskNotFound { .. } => "请求的任务不存在",
            MarketplaceError::ActorNotFound { .. } => "请求的参与者不存在",
            MarketplaceError::MessageNotFound { .. } => "请求的消息不存在",
            MarketplaceError::CategoryNotFound { .. } => "请求的类别不存在",
            MarketplaceError::ProfileNotFound { .. } => "请求的社交档案不存在",
            MarketplaceError::CategoryInUse { .. } => "类别仍被任务引用，无法删除",
            MarketplaceError::InvalidDescription => "任务描述不能为空",
            MarketplaceError::InvalidCategory(_) => "任务类别无效",
            MarketplaceError::InvalidPrice(_) => "最高价格必须大于0",
            MarketplaceError::SelfMessage => "不能给自己发送消息",
            MarketplaceError::ValidationError(_) => "输入数据验证失败",
            MarketplaceError::Permission(_) => "您没有执行此操作的权限",
            MarketplaceError::Unauthenticated => "请先登录后再访问",
            _ => "系统繁忙，请稍后重试",
        }
    }
}

impl From<serde_json::Error> for MarketplaceError {
    fn from(err: serde_json::Error) -> Self {
        MarketplaceError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for MarketplaceError {
    fn from(err: anyhow::Error) -> Self {
        MarketplaceError::Internal(err.to_string())
    }
}
