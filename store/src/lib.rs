pub mod directory;
pub mod metrics;
pub mod models;
pub mod query;
pub mod seed;

pub use directory::Directory;
pub use metrics::DashboardMetrics;
pub use models::{Status, User};
pub use query::{PageView, SortOrder, StatusFilter, UserQuery, PAGE_SIZE};
