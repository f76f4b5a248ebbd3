pub mod postgres_actor_directory;
pub mod postgres_category_repository;
pub mod postgres_message_repository;
pub mod postgres_profile_repository;
pub mod postgres_task_repository;

pub use postgres_actor_directory::PostgresActorDirectory;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_message_repository::PostgresMessageRepository;
pub use postgres_profile_repository::PostgresSocialProfileRepository;
pub use postgres_task_repository::PostgresTaskRepository;
