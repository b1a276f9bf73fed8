use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use idtask_dashboard::api::{self, HTTPClient, RequestClient};
use idtask_dashboard::view::StatusBoard;
use idtask_dashboard::{ApiError, ClientConfig, LoadOutcome, TaskDraft, TaskListController};
use idtask_dashboard::{TaskStatus, TaskType};

#[derive(Clone, Default)]
struct Backend {
    tasks: Arc<Mutex<Vec<Value>>>,
    list_requests: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    fn seeded(count: usize) -> Self {
        let backend = Self::default();
        {
            let mut tasks = backend.tasks.lock().unwrap();
            for n in 1..=count {
                tasks.push(task_row(&format!("task-{}", n), "WebPage"));
            }
        }
        backend
    }
}

fn task_row(id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "payload": "\"\"",
        "status": "Pending",
        "retries": 0,
        "max_retry": 3,
        "priority": 0,
        "expire_at": "2025-06-02T10:00:00Z",
        "created_at": "2025-06-01T10:00:00Z",
        "executed_by": null,
        "executed_at": null
    })
}

async fn handle_list(State(backend): State<Backend>, Json(req): Json<Value>) -> Json<Value> {
    backend.list_requests.lock().unwrap().push(req.clone());
    let page = req["page"].as_u64().unwrap_or(1).max(1) as usize;
    let size = req["page_size"].as_u64().unwrap_or(10).max(1) as usize;
    let tasks = backend.tasks.lock().unwrap();
    let rows: Vec<Value> = tasks.iter().skip((page - 1) * size).take(size).cloned().collect();
    Json(json!({
        "status": "OK",
        "data": {"status": "OK", "list_data": rows, "total": tasks.len()}
    }))
}

async fn handle_create(State(backend): State<Backend>, Json(req): Json<Value>) -> Json<Value> {
    let mut tasks = backend.tasks.lock().unwrap();
    let id = format!("created-{}", tasks.len() + 1);
    let row = task_row(&id, req["type"].as_str().unwrap_or("Unknown"));
    tasks.insert(0, row.clone());
    Json(json!({"status": "OK", "data": row}))
}

async fn handle_schedulers() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "Internal Server Error", "error": "Failed to get status from etcd"})),
    )
}

async fn handle_workers() -> Json<Value> {
    Json(json!([
        {"id": "worker-1", "status": "ok", "isLeader": false, "heart_beat": "2025-06-01T10:00:00Z"},
        {"id": "worker-2", "status": "failed", "isLeader": false, "heart_beat": "2025-06-01T09:59:00Z"}
    ]))
}

async fn handle_garbage() -> &'static str {
    "<html>not json</html>"
}

fn spawn_backend(backend: Backend) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/tasks", post(handle_create))
        .route("/tasks/list", post(handle_list))
        .route("/scheduler/status", post(handle_schedulers))
        .route("/worker/status", post(handle_workers))
        .route("/garbage", post(handle_garbage))
        .with_state(backend);

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });
    });

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HTTPClient {
    HTTPClient::new(ClientConfig::new(base_url)).unwrap()
}

#[test]
fn pages_through_stub_backend() {
    let base = spawn_backend(Backend::seeded(25));
    let mut controller = TaskListController::new(client_for(&base));

    assert_eq!(controller.load_page(2), Ok(LoadOutcome::Applied));
    let ids: Vec<&str> = controller.items().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"task-11"));
    assert_eq!(ids.last(), Some(&"task-20"));
    assert_eq!(controller.window().total_pages(), 3);
    assert_eq!(controller.window().buttons().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn create_then_refresh_reloads_same_page_once() {
    let backend = Backend::seeded(25);
    let base = spawn_backend(backend.clone());
    let mut controller = TaskListController::new(client_for(&base));
    controller.load_page(2).unwrap();

    *controller.draft_mut() = TaskDraft::new(TaskType::Email, TaskStatus::Pending);
    let submitted = controller.create_task().unwrap();
    assert_eq!(submitted.refresh, Ok(LoadOutcome::Applied));

    assert_eq!(controller.total(), 26);
    assert_eq!(controller.current_page(), 2);
    assert_eq!(controller.items()[0].id, "task-10");
    assert!(controller.draft().is_blank());

    let requests = backend.list_requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1], json!({"page": 2, "page_size": 10}));
}

#[test]
fn non_success_status_is_transport_failure() {
    let base = spawn_backend(Backend::default());
    let err = client_for(&base)
        .post("/scheduler/status", &json!({}))
        .unwrap_err();
    assert_eq!(err.http_status(), Some(500));
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "http 500: Failed to get status from etcd");
}

#[test]
fn non_json_body_is_malformed() {
    let base = spawn_backend(Backend::default());
    let err = client_for(&base).post("/garbage", &json!({})).unwrap_err();
    assert!(matches!(err, ApiError::Malformed { .. }));
}

#[test]
fn unreachable_backend_has_no_status() {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = client_for(&format!("http://127.0.0.1:{}", port))
        .post("/tasks/list", &json!({"page": 1, "page_size": 10}))
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { status: None, .. }));
}

#[test]
fn status_board_polls_both_endpoints() {
    let base = spawn_backend(Backend::default());
    let client = client_for(&base);
    let board = StatusBoard::load(&client);

    assert!(board.schedulers.is_err());
    let workers = board.workers.unwrap();
    assert_eq!(workers.len(), 2);
    assert_eq!(workers[1].status, "failed");

    let direct = api::worker_status(&client).unwrap();
    assert_eq!(direct.len(), 2);
}
