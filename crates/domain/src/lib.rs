pub mod access_policy;
pub mod entities;
pub mod repositories;

pub use access_policy::can_view;
pub use entities::*;
pub use manyworker_errors::{MarketplaceError, MarketplaceResult};
pub use repositories::*;
