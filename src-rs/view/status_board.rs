use tracing::warn;

use crate::api::client::RequestClient;
use crate::api::endpoints;
use crate::error::ApiError;
use crate::task::{SchedulerStatus, WorkerStatus};

/// Scheduler and worker cards, each section loaded independently.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBoard {
    pub schedulers: Result<Vec<SchedulerStatus>, ApiError>,
    pub workers: Result<Vec<WorkerStatus>, ApiError>,
}

impl StatusBoard {
    pub fn load<C: RequestClient + ?Sized>(client: &C) -> Self {
        let schedulers = endpoints::scheduler_status(client);
        if let Err(err) = &schedulers {
            warn!(error = %err, "failed to load schedulers");
        }
        let workers = endpoints::worker_status(client);
        if let Err(err) = &workers {
            warn!(error = %err, "failed to load workers");
        }
        Self { schedulers, workers }
    }

    pub fn leader(&self) -> Option<&SchedulerStatus> {
        self.schedulers
            .as_ref()
            .ok()
            .and_then(|items| items.iter().find(|s| s.is_leader))
    }

    pub fn is_healthy(&self) -> bool {
        self.schedulers.is_ok() && self.workers.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct ByPath;

    impl RequestClient for ByPath {
        fn post(&self, path: &str, _body: &Value) -> Result<Value, ApiError> {
            match path {
                "/scheduler/status" => Ok(json!([
                    {"id": "s1", "status": "running", "isLeader": "No"},
                    {"id": "s2", "status": "running", "isLeader": "Yes"}
                ])),
                _ => Err(ApiError::transport(Some(500), "Failed to get status from etcd")),
            }
        }
    }

    #[test]
    fn one_failing_section_does_not_hide_the_other() {
        let board = StatusBoard::load(&ByPath);
        assert_eq!(board.schedulers.as_ref().map(Vec::len), Ok(2));
        assert!(board.workers.is_err());
        assert!(!board.is_healthy());
        assert_eq!(board.leader().map(|s| s.id.as_str()), Some("s2"));
    }
}
