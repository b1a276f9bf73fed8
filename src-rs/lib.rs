pub mod config;
pub mod error;

#[path = "task/lib.rs"]
pub mod task;
#[path = "api/lib.rs"]
pub mod api;
#[path = "view/lib.rs"]
pub mod view;

pub use config::ClientConfig;
pub use error::ApiError;
pub use task::{Task, TaskDraft, TaskStatus, TaskType};
pub use view::{LoadOutcome, LoadState, TaskListController};
