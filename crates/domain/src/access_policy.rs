//! 任务可见性策略
//!
//! 按角色决定一个已解析的参与者能否查看某个任务。调用方必须先完成
//! 认证，这里假设参与者已经解析成功。纯函数，无副作用。

use crate::entities::{Actor, ActorRole, Task};

/// 判断参与者能否查看任务
///
/// 规则按顺序求值，首个命中生效：
/// - 管理员总是可见
/// - 工作者总是可见（需要浏览任务以便投标）
/// - 客户仅可见自己拥有的任务
pub fn can_view(actor: &Actor, task: &Task) -> bool {
    match actor.role {
        ActorRole::Administrador => true,
        ActorRole::Trabajador => true,
        ActorRole::Cliente => task.client_id == actor.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn actor(id: i64, role: ActorRole) -> Actor {
        Actor {
            id,
            name: format!("actor-{id}"),
            email: format!("actor-{id}@example.com"),
            role,
        }
    }

    fn task_owned_by(client_id: i64) -> Task {
        let now = Utc::now();
        Task {
            id: "t-1".to_string(),
            description: "Montar estantería".to_string(),
            address: None,
            max_price: 50.0,
            end_date: None,
            category_id: "hogar".to_string(),
            client_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_admin_sees_any_task() {
        let admin = actor(1, ActorRole::Administrador);
        assert!(can_view(&admin, &task_owned_by(99)));
    }

    #[test]
    fn test_worker_sees_any_task() {
        let worker = actor(2, ActorRole::Trabajador);
        assert!(can_view(&worker, &task_owned_by(99)));
    }

    #[test]
    fn test_client_sees_only_own_task() {
        let owner = actor(10, ActorRole::Cliente);
        let other = actor(11, ActorRole::Cliente);
        let task = task_owned_by(10);

        assert!(can_view(&owner, &task));
        assert!(!can_view(&other, &task));
    }

    #[test]
    fn test_visibility_scenario() {
        // A1=CLIENTE 拥有任务 T，A2=CLIENTE，W1=TRABAJADOR
        let a1 = actor(1, ActorRole::Cliente);
        let a2 = actor(2, ActorRole::Cliente);
        let w1 = actor(3, ActorRole::Trabajador);
        let t = task_owned_by(1);

        assert!(can_view(&a1, &t));
        assert!(!can_view(&a2, &t));
        assert!(can_view(&w1, &t));
    }
}
