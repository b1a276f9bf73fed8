pub mod client;
pub mod endpoints;
pub mod envelope;

pub use client::{HTTPClient, RequestClient};
pub use endpoints::{create_task, list_tasks, scheduler_status, worker_status, ListResult};
pub use envelope::Envelope;
