use serde::Serialize;

use super::types::{TaskStatus, TaskType};
use crate::error::ApiError;

/// Form state for a task that has not been submitted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_type: Option<TaskType>,
    pub status: TaskStatus,
    pub payload: Option<String>,
    pub priority: Option<i32>,
    pub max_retry: Option<u32>,
}

/// What the form resets to after every successful submission.
pub const BLANK_DRAFT: TaskDraft = TaskDraft {
    task_type: None,
    status: TaskStatus::Pending,
    payload: None,
    priority: None,
    max_retry: None,
};

impl Default for TaskDraft {
    fn default() -> Self {
        BLANK_DRAFT
    }
}

/// Wire body for `POST /tasks`.
#[derive(Debug, PartialEq, Serialize)]
pub struct CreateTaskRequest<'a> {
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retry: Option<u32>,
}

impl TaskDraft {
    pub fn new(task_type: TaskType, status: TaskStatus) -> Self {
        Self {
            task_type: Some(task_type),
            status,
            ..BLANK_DRAFT
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == BLANK_DRAFT
    }

    pub fn to_request(&self) -> Result<CreateTaskRequest<'_>, ApiError> {
        let task_type = match self.task_type {
            Some(TaskType::Unknown) | None => {
                return Err(ApiError::InvalidDraft {
                    reason: "task type is required".to_string(),
                })
            }
            Some(kind) => kind,
        };
        if self.status == TaskStatus::Unknown {
            return Err(ApiError::InvalidDraft {
                reason: "task status is required".to_string(),
            });
        }
        Ok(CreateTaskRequest {
            task_type,
            status: self.status,
            payload: self.payload.as_deref().filter(|p| !p.trim().is_empty()),
            priority: self.priority,
            max_retry: self.max_retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn minimal_draft_serializes_type_and_status_only() {
        let draft = TaskDraft::new(TaskType::Email, TaskStatus::Pending);
        let body = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(body, json!({"type": "Email", "status": "Pending"}));
    }

    #[test]
    fn extras_are_sent_when_present() {
        let draft = TaskDraft {
            payload: Some("https://example.com".to_string()),
            priority: Some(5),
            ..TaskDraft::new(TaskType::WebPage, TaskStatus::Pending)
        };
        let body = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "WebPage",
                "status": "Pending",
                "payload": "https://example.com",
                "priority": 5
            })
        );
    }

    #[test]
    fn blank_draft_is_rejected_locally() {
        let err = BLANK_DRAFT.to_request().unwrap_err();
        assert!(matches!(err, ApiError::InvalidDraft { .. }));
        assert!(TaskDraft::default().is_blank());
    }
}
