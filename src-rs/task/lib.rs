pub mod draft;
pub mod types;

pub use draft::{TaskDraft, BLANK_DRAFT};
pub use types::{SchedulerStatus, Task, TaskStatus, TaskType, WorkerStatus};
