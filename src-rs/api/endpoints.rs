use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::client::RequestClient;
use super::envelope::{Envelope, STATUS_OK};
use crate::error::ApiError;
use crate::task::{SchedulerStatus, Task, TaskDraft, WorkerStatus};

pub const TASKS_PATH: &str = "/tasks";
pub const TASKS_LIST_PATH: &str = "/tasks/list";
pub const SCHEDULER_STATUS_PATH: &str = "/scheduler/status";
pub const WORKER_STATUS_PATH: &str = "/worker/status";

#[derive(Debug, Serialize)]
pub struct ListRequest {
    pub page: usize,
    pub page_size: usize,
}

/// One page of tasks plus the total the backend reported alongside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListResult {
    pub items: Vec<Task>,
    pub total: usize,
}

// The list handler nests its own `{status, list_data, total}` inside `data`;
// some deployments return it flat at the top level instead.
#[derive(Debug, Deserialize)]
struct ListPayload {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    list_data: Option<Vec<Task>>,
    #[serde(default)]
    total: Option<usize>,
}

impl ListPayload {
    fn into_result(self) -> Result<ListResult, ApiError> {
        if let Some(status) = self.status.filter(|status| status != STATUS_OK) {
            return Err(ApiError::application(
                self.error.unwrap_or_else(|| format!("status {}", status)),
            ));
        }
        let total = self
            .total
            .ok_or_else(|| ApiError::malformed("list response has no total"))?;
        Ok(ListResult {
            items: self.list_data.unwrap_or_default(),
            total,
        })
    }
}

pub fn list_tasks<C: RequestClient + ?Sized>(
    client: &C,
    page: usize,
    page_size: usize,
) -> Result<ListResult, ApiError> {
    let body = serde_json::to_value(ListRequest { page, page_size })?;
    let raw = client.post(TASKS_LIST_PATH, &body)?;

    let payload: ListPayload = if raw.get("list_data").is_some() {
        serde_json::from_value(raw)?
    } else {
        Envelope::from_value(raw)?.into_data()?
    };
    payload.into_result()
}

pub fn create_task<C: RequestClient + ?Sized>(client: &C, draft: &TaskDraft) -> Result<(), ApiError> {
    let body = serde_json::to_value(draft.to_request()?)?;
    let envelope = Envelope::from_value(client.post(TASKS_PATH, &body)?)?.check()?;
    if let Some(id) = envelope
        .data
        .as_ref()
        .and_then(|data| data.get("id"))
        .and_then(Value::as_str)
    {
        debug!(task_id = id, "task created");
    }
    Ok(())
}

pub fn scheduler_status<C: RequestClient + ?Sized>(client: &C) -> Result<Vec<SchedulerStatus>, ApiError> {
    status_list(client, SCHEDULER_STATUS_PATH)
}

pub fn worker_status<C: RequestClient + ?Sized>(client: &C) -> Result<Vec<WorkerStatus>, ApiError> {
    status_list(client, WORKER_STATUS_PATH)
}

fn status_list<C, T>(client: &C, path: &str) -> Result<Vec<T>, ApiError>
where
    C: RequestClient + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let envelope = Envelope::from_value(client.post(path, &json!({}))?)?.check()?;
    match envelope.data {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(data) => serde_json::from_value(data).map_err(ApiError::from),
    }
}
