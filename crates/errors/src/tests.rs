#[cfg(test)]
mod error_tests {
    use crate::*;

    #[test]
    fn test_marketplace_error_display() {
        let db_op_error = MarketplaceError::DatabaseOperation("Connection failed".to_string());
        assert_eq!(db_op_error.to_string(), "数据库操作错误: Connection failed");

        let task_error = MarketplaceError::TaskNotFound {
            id: "t-123".to_string(),
        };
        assert_eq!(task_error.to_string(), "任务未找到: t-123");

        let actor_error = MarketplaceError::ActorNotFound { id: 7 };
        assert_eq!(actor_error.to_string(), "参与者未找到: 7");

        let message_error = MarketplaceError::MessageNotFound { id: 42 };
        assert_eq!(message_error.to_string(), "消息未找到: 42");

        let category_error = MarketplaceError::CategoryNotFound {
            id: "hogar".to_string(),
        };
        assert_eq!(category_error.to_string(), "类别未找到: hogar");

        let in_use_error = MarketplaceError::CategoryInUse {
            id: "hogar".to_string(),
        };
        assert_eq!(in_use_error.to_string(), "类别 hogar 仍被任务引用，无法删除");

        let description_error = MarketplaceError::InvalidDescription;
        assert_eq!(description_error.to_string(), "任务描述不能为空");

        let price_error = MarketplaceError::InvalidPrice(-5.0);
        assert_eq!(price_error.to_string(), "最高价格必须大于0: -5");

        let self_error = MarketplaceError::SelfMessage;
        assert_eq!(self_error.to_string(), "不能给自己发送消息");

        let validation_error = MarketplaceError::ValidationError("Invalid input".to_string());
        assert_eq!(validation_error.to_string(), "数据验证失败: Invalid input");

        let perm_error = MarketplaceError::Permission("Access denied".to_string());
        assert_eq!(perm_error.to_string(), "权限不足: Access denied");

        let config_error = MarketplaceError::Configuration("Missing required field".to_string());
        assert_eq!(config_error.to_string(), "配置错误: Missing required field");

        let internal_error = MarketplaceError::Internal("Unexpected error".to_string());
        assert_eq!(internal_error.to_string(), "内部错误: Unexpected error");
    }

    #[test]
    fn test_marketplace_error_creation_methods() {
        let error = MarketplaceError::database_error("Connection failed");
        assert!(matches!(error, MarketplaceError::DatabaseOperation(_)));

        let error = MarketplaceError::task_not_found("t-123");
        assert!(matches!(error, MarketplaceError::TaskNotFound { id } if id == "t-123"));

        let error = MarketplaceError::actor_not_found(7);
        assert!(matches!(error, MarketplaceError::ActorNotFound { id: 7 }));

        let error = MarketplaceError::message_not_found(42);
        assert!(matches!(error, MarketplaceError::MessageNotFound { id: 42 }));

        let error = MarketplaceError::category_not_found("hogar");
        assert!(matches!(error, MarketplaceError::CategoryNotFound { id } if id == "hogar"));

        let error = MarketplaceError::profile_not_found(3);
        assert!(matches!(error, MarketplaceError::ProfileNotFound { id: 3 }));

        let error = MarketplaceError::category_in_use("hogar");
        assert!(matches!(error, MarketplaceError::CategoryInUse { id } if id == "hogar"));

        let error = MarketplaceError::permission_denied("Access denied");
        assert!(matches!(error, MarketplaceError::Permission(_)));

        let error = MarketplaceError::validation_error("Invalid input");
        assert!(matches!(error, MarketplaceError::ValidationError(_)));

        let error = MarketplaceError::config_error("Missing config");
        assert!(matches!(error, MarketplaceError::Configuration(_)));
    }

    #[test]
    fn test_is_not_found() {
        assert!(MarketplaceError::task_not_found("t-1").is_not_found());
        assert!(MarketplaceError::actor_not_found(1).is_not_found());
        assert!(MarketplaceError::message_not_found(1).is_not_found());
        assert!(MarketplaceError::category_not_found("c-1").is_not_found());
        assert!(MarketplaceError::profile_not_found(1).is_not_found());

        assert!(!MarketplaceError::InvalidDescription.is_not_found());
        assert!(!MarketplaceError::CategoryInUse {
            id: "c-1".to_string()
        }
        .is_not_found());
        assert!(!MarketplaceError::Internal("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(MarketplaceError::InvalidDescription.is_validation());
        assert!(MarketplaceError::InvalidCategory("".to_string()).is_validation());
        assert!(MarketplaceError::InvalidPrice(0.0).is_validation());
        assert!(MarketplaceError::SelfMessage.is_validation());
        assert!(MarketplaceError::ValidationError("bad".to_string()).is_validation());

        assert!(!MarketplaceError::task_not_found("t-1").is_validation());
        assert!(!MarketplaceError::Permission("denied".to_string()).is_validation());
        assert!(!MarketplaceError::Unauthenticated.is_validation());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            MarketplaceError::task_not_found("t-1").user_message(),
            "请求的任务不存在"
        );
        assert_eq!(
            MarketplaceError::actor_not_found(7).user_message(),
            "请求的参与者不存在"
        );
        assert_eq!(
            MarketplaceError::category_in_use("hogar").user_message(),
            "类别仍被任务引用，无法删除"
        );
        assert_eq!(
            MarketplaceError::InvalidPrice(-1.0).user_message(),
            "最高价格必须大于0"
        );
        assert_eq!(
            MarketplaceError::Permission("denied".to_string()).user_message(),
            "您没有执行此操作的权限"
        );
        assert_eq!(
            MarketplaceError::Unauthenticated.user_message(),
            "请先登录后再访问"
        );

        // generic fallback
        assert_eq!(
            MarketplaceError::Internal("Critical error".to_string()).user_message(),
            "系统繁忙，请稍后重试"
        );
    }

    #[test]
    fn test_marketplace_result_type() {
        let result: MarketplaceResult<i32> = Ok(42);
        assert_eq!(result.expect("Should be Ok"), 42);

        let result: MarketplaceResult<i32> = Err(MarketplaceError::task_not_found("t-1"));
        assert!(result.is_err());
        assert!(matches!(
            result.expect_err("Should be Err"),
            MarketplaceError::TaskNotFound { .. }
        ));
    }

    #[test]
    fn test_error_from_sqlx() {
        let sqlx_error = sqlx::Error::RowNotFound;
        let marketplace_error: MarketplaceError = sqlx_error.into();
        assert!(matches!(marketplace_error, MarketplaceError::Database(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "JSON parse error",
        ));
        let marketplace_error: MarketplaceError = json_error.into();
        assert!(matches!(
            marketplace_error,
            MarketplaceError::Serialization(_)
        ));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_error = anyhow::Error::msg("Some error");
        let marketplace_error: MarketplaceError = anyhow_error.into();
        assert!(matches!(marketplace_error, MarketplaceError::Internal(_)));
    }

    #[test]
    fn test_marketplace_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarketplaceError>();
    }

    #[test]
    fn test_error_chain_compatibility() {
        let result: Result<(), MarketplaceError> = Err(MarketplaceError::task_not_found("t-9"));
        let anyhow_result: Result<(), anyhow::Error> = result.map_err(|e| e.into());
        assert!(anyhow_result.is_err());
        assert!(anyhow_result
            .expect_err("Should be Err")
            .to_string()
            .contains("任务未找到"));
    }
}
