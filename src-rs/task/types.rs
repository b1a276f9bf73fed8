use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    WebPage,
    Email,
    BatchJob,
    AIJob,
    #[serde(other)]
    Unknown,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [
        TaskType::WebPage,
        TaskType::Email,
        TaskType::BatchJob,
        TaskType::AIJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::WebPage => "WebPage",
            TaskType::Email => "Email",
            TaskType::BatchJob => "BatchJob",
            TaskType::AIJob => "AIJob",
            TaskType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown task type '{}', expected one of WebPage, Email, BatchJob, AIJob",
                    raw.trim()
                )
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "running")]
    Running,
    #[serde(alias = "completed", alias = "success")]
    Completed,
    #[serde(alias = "failed")]
    Failed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::Running,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Running => "Running",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown task status '{}', expected one of Pending, Running, Completed, Failed",
                    raw.trim()
                )
            })
    }
}

/// A task as reported by the backend. The client never edits these, it only re-fetches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub executed_by: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub retries: Option<u32>,
    #[serde(default)]
    pub max_retry: Option<u32>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulerStatus {
    pub id: String,
    pub status: String,
    #[serde(rename = "isLeader", default, deserialize_with = "leader_flag")]
    pub is_leader: bool,
    #[serde(default)]
    pub heart_beat: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerStatus {
    pub id: String,
    pub status: String,
    #[serde(rename = "isLeader", default, deserialize_with = "leader_flag")]
    pub is_leader: bool,
    #[serde(default)]
    pub heart_beat: Option<DateTime<Utc>>,
}

// Leadership arrives as a bool from some services and as "Yes"/"No" from others.
fn leader_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => matches!(
            text.trim().to_lowercase().as_str(),
            "yes" | "true" | "1" | "leader"
        ),
        None => false,
    })
}
