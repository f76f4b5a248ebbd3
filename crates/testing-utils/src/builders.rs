//! Test data builders for creating test entities
//!
//! This module provides builder patterns for creating test data with
//! sensible defaults and easy customization.

use chrono::{DateTime, Utc};
use manyworker_domain::entities::{
    Actor, ActorRole, Category, Message, SocialProfile, Task, TaskDraft,
};

/// Builder for creating test Actor entities
pub struct ActorBuilder {
    actor: Actor,
}

impl ActorBuilder {
    pub fn new() -> Self {
        Self {
            actor: Actor {
                id: 1,
                name: "test_actor".to_string(),
                email: "test_actor@example.com".to_string(),
                role: ActorRole::Cliente,
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.actor.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.actor.name = name.to_string();
        self
    }

    pub fn with_role(mut self, role: ActorRole) -> Self {
        self.actor.role = role;
        self
    }

    pub fn admin(mut self) -> Self {
        self.actor.role = ActorRole::Administrador;
        self
    }

    pub fn client(mut self) -> Self {
        self.actor.role = ActorRole::Cliente;
        self
    }

    pub fn worker(mut self) -> Self {
        self.actor.role = ActorRole::Trabajador;
        self
    }

    pub fn build(self) -> Actor {
        self.actor
    }
}

impl Default for ActorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Task entities
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            task: Task {
                id: "task-1".to_string(),
                description: "Montar muebles".to_string(),
                address: None,
                max_price: 100.0,
                end_date: None,
                category_id: "hogar".to_string(),
                client_id: 1,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.task.id = id.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.task.max_price = max_price;
        self
    }

    pub fn with_category(mut self, category_id: &str) -> Self {
        self.task.category_id = category_id.to_string();
        self
    }

    pub fn owned_by(mut self, client_id: i64) -> Self {
        self.task.client_id = client_id;
        self
    }

    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.task.end_date = Some(end_date);
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test TaskDraft values
pub struct TaskDraftBuilder {
    draft: TaskDraft,
}

impl TaskDraftBuilder {
    pub fn new() -> Self {
        Self {
            draft: TaskDraft {
                description: "Montar muebles".to_string(),
                address: None,
                max_price: 100.0,
                end_date: None,
                category_id: "hogar".to_string(),
            },
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.draft.description = description.to_string();
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.draft.max_price = max_price;
        self
    }

    pub fn with_category(mut self, category_id: &str) -> Self {
        self.draft.category_id = category_id.to_string();
        self
    }

    pub fn build(self) -> TaskDraft {
        self.draft
    }
}

impl Default for TaskDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Category entities
pub struct CategoryBuilder {
    category: Category,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            category: Category {
                id: "hogar".to_string(),
                title: "Hogar".to_string(),
                applicable_laws: vec![],
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.category.id = id.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.category.title = title.to_string();
        self
    }

    pub fn with_laws(mut self, laws: Vec<&str>) -> Self {
        self.category.applicable_laws = laws.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> Category {
        self.category
    }
}

impl Default for CategoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Message entities
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            message: Message {
                id: 0,
                sender_id: 1,
                recipient_id: 2,
                sent_at: Utc::now(),
                subject: "Hola".to_string(),
                body: "¿Sigue disponible la tarea?".to_string(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.message.id = id;
        self
    }

    pub fn from_sender(mut self, sender_id: i64) -> Self {
        self.message.sender_id = sender_id;
        self
    }

    pub fn to_recipient(mut self, recipient_id: i64) -> Self {
        self.message.recipient_id = recipient_id;
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.message.subject = subject.to_string();
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.message.body = body.to_string();
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test SocialProfile entities
pub struct SocialProfileBuilder {
    profile: SocialProfile,
}

impl SocialProfileBuilder {
    pub fn new() -> Self {
        Self {
            profile: SocialProfile {
                id: 1,
                actor_id: 1,
                nickname: "test_nick".to_string(),
                network: "instagram".to_string(),
                link: "https://instagram.com/test_nick".to_string(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.profile.id = id;
        self
    }

    pub fn owned_by(mut self, actor_id: i64) -> Self {
        self.profile.actor_id = actor_id;
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.profile.nickname = nickname.to_string();
        self
    }

    pub fn build(self) -> SocialProfile {
        self.profile
    }
}

impl Default for SocialProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
