pub mod category_service;
pub mod message_service;
pub mod profile_service;
pub mod task_service;

pub use category_service::*;
pub use message_service::*;
pub use profile_service::*;
pub use task_service::*;
