use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 参与者角色，封闭的标签枚举
///
/// 角色在本系统范围内不可变，匹配必须穷尽，未知角色在类型层面不可表达。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActorRole {
    #[serde(rename = "ADMINISTRADOR")]
    Administrador,
    #[serde(rename = "CLIENTE")]
    Cliente,
    #[serde(rename = "TRABAJADOR")]
    Trabajador,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Administrador => "ADMINISTRADOR",
            ActorRole::Cliente => "CLIENTE",
            ActorRole::Trabajador => "TRABAJADOR",
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for ActorRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("VARCHAR")
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ActorRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s {
            "ADMINISTRADOR" => Ok(ActorRole::Administrador),
            "CLIENTE" => Ok(ActorRole::Cliente),
            "TRABAJADOR" => Ok(ActorRole::Trabajador),
            _ => Err(format!("Invalid actor role: {s}").into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ActorRole {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
    }
}

/// 市场参与者：管理员、客户或工作者
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: ActorRole,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, ActorRole::Administrador)
    }
    pub fn is_client(&self) -> bool {
        matches!(self.role, ActorRole::Cliente)
    }
    pub fn is_worker(&self) -> bool {
        matches!(self.role, ActorRole::Trabajador)
    }
}

/// 市场任务，由唯一的客户参与者拥有
///
/// 持久化后的任务保证：拥有者非空、描述非空、类别已设置、最高价格为正。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub address: Option<String>,
    pub max_price: f64,
    pub end_date: Option<DateTime<Utc>>,
    pub category_id: String,
    pub client_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_draft(draft: TaskDraft, client_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            description: draft.description,
            address: draft.address,
            max_price: draft.max_price,
            end_date: draft.end_date,
            category_id: draft.category_id,
            client_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// 应用更新补丁，拥有者不变
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        self.description = patch.description;
        self.address = patch.address;
        self.max_price = patch.max_price;
        self.end_date = patch.end_date;
        self.category_id = patch.category_id;
        self.updated_at = Utc::now();
    }

    pub fn entity_description(&self) -> String {
        format!("任务 '{}' (ID: {})", self.description, self.id)
    }
}

/// 创建任务时的输入，拥有者由服务端根据当前客户指定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub description: String,
    pub address: Option<String>,
    pub max_price: f64,
    pub end_date: Option<DateTime<Utc>>,
    pub category_id: String,
}

/// 更新任务时可替换的字段，其余字段保持不变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPatch {
    pub description: String,
    pub address: Option<String>,
    pub max_price: f64,
    pub end_date: Option<DateTime<Utc>>,
    pub category_id: String,
}

/// 参与者之间的消息，创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub sent_at: DateTime<Utc>,
    pub subject: String,
    pub body: String,
}

impl Message {
    pub fn new(
        sender_id: i64,
        recipient_id: i64,
        sent_at: DateTime<Utc>,
        subject: String,
        body: String,
    ) -> Self {
        Self {
            id: 0, // 将由数据库生成
            sender_id,
            recipient_id,
            sent_at,
            subject,
            body,
        }
    }
}

/// 任务类别及其适用法规
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub applicable_laws: Vec<String>,
}

impl Category {
    pub fn apply_patch(&mut self, patch: CategoryPatch) {
        self.title = patch.title;
        self.applicable_laws = patch.applicable_laws;
    }
}

/// 类别更新补丁
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub title: String,
    pub applicable_laws: Vec<String>,
}

/// 参与者的社交档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfile {
    pub id: i64,
    pub actor_id: i64,
    pub nickname: String,
    pub network: String,
    pub link: String,
}

impl SocialProfile {
    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        self.actor_id == actor.id
    }

    pub fn apply_patch(&mut self, patch: SocialProfilePatch) {
        self.nickname = patch.nickname;
        self.network = patch.network;
        self.link = patch.link;
    }
}

/// 社交档案更新补丁
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfilePatch {
    pub nickname: String,
    pub network: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_role_serde_tags() {
        let json = serde_json::to_string(&ActorRole::Administrador).unwrap();
        assert_eq!(json, "\"ADMINISTRADOR\"");

        let role: ActorRole = serde_json::from_str("\"TRABAJADOR\"").unwrap();
        assert_eq!(role, ActorRole::Trabajador);

        assert!(serde_json::from_str::<ActorRole>("\"INVITADO\"").is_err());
    }

    #[test]
    fn test_task_from_draft_assigns_owner_and_id() {
        let draft = TaskDraft {
            description: "Pintar salón".to_string(),
            address: Some("Calle Mayor 1".to_string()),
            max_price: 120.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let task = Task::from_draft(draft, 7);

        assert_eq!(task.client_id, 7);
        assert!(!task.id.is_empty());
        assert_eq!(task.description, "Pintar salón");
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_apply_patch_keeps_owner() {
        let draft = TaskDraft {
            description: "Pintar salón".to_string(),
            address: None,
            max_price: 120.0,
            end_date: None,
            category_id: "hogar".to_string(),
        };
        let mut task = Task::from_draft(draft, 7);
        let original_id = task.id.clone();

        task.apply_patch(TaskPatch {
            description: "Pintar salón y pasillo".to_string(),
            address: Some("Calle Mayor 1".to_string()),
            max_price: 150.0,
            end_date: None,
            category_id: "reformas".to_string(),
        });

        assert_eq!(task.id, original_id);
        assert_eq!(task.client_id, 7);
        assert_eq!(task.max_price, 150.0);
        assert_eq!(task.category_id, "reformas");
    }

    #[test]
    fn test_profile_ownership() {
        let owner = Actor {
            id: 3,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: ActorRole::Cliente,
        };
        let stranger = Actor {
            id: 4,
            name: "Luis".to_string(),
            email: "luis@example.com".to_string(),
            role: ActorRole::Cliente,
        };
        let profile = SocialProfile {
            id: 1,
            actor_id: 3,
            nickname: "ana_r".to_string(),
            network: "instagram".to_string(),
            link: "https://instagram.com/ana_r".to_string(),
        };

        assert!(profile.is_owned_by(&owner));
        assert!(!profile.is_owned_by(&stranger));
    }
}
