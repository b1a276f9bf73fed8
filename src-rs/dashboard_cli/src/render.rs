use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use idtask_dashboard::task::{SchedulerStatus, Task, TaskDraft, TaskStatus, TaskType, WorkerStatus};
use idtask_dashboard::view::{PageWindow, StatusBoard};
use idtask_dashboard::ApiError;

use crate::models::CLIConfig;

pub fn banner(cfg: &CLIConfig) {
    println!("Task Scheduler Dashboard");
    println!("API: {}", cfg.base_url);
    println!("Type /help for commands.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                 Show commands");
    println!("  /exit | /quit         Exit");
    println!("  /tasks [page]         Reload the current page, or load [page]");
    println!("  /page <n>             Jump to a page shown in the page strip");
    println!("  /next | /prev         Move one page");
    println!("  /draft                Show the new-task form");
    println!("  /type <type>          Set task type ({})", join(&TaskType::ALL));
    println!("  /status <status>      Set task status ({})", join(&TaskStatus::ALL));
    println!("  /payload <text>       Set payload");
    println!("  /priority <n>         Set priority");
    println!("  /retry <n>            Set max retries");
    println!("  /clear                Reset the form");
    println!("  /submit               Create the task and refresh the page");
    println!("  /board                Reload scheduler and worker status");
    println!("  /config               Show current config");
    println!("  /base <url>           Update base URL");
}

pub fn tasks(items: &[Task], window: &PageWindow) {
    println!("{}", task_table(items, window));
    println!("{}", page_strip(window));
}

pub fn task_table(items: &[Task], window: &PageWindow) -> String {
    if items.is_empty() {
        return "no tasks".to_string();
    }
    let mut out = format!(
        "{:>4}  {:<36}  {:<9}  {:<9}  {:<19}  {:<19}  {}",
        "#", "ID", "TYPE", "STATUS", "CREATED", "EXECUTED", "BY"
    );
    for (offset, task) in items.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{:>4}  {:<36}  {:<9}  {:<9}  {:<19}  {:<19}  {}",
            window.first_item().saturating_add(offset),
            task.id,
            task.task_type,
            task.status,
            timestamp(&task.created_at),
            task.executed_at.as_ref().map(timestamp).unwrap_or_else(|| "-".to_string()),
            task.executed_by.as_deref().unwrap_or("-"),
        ));
    }
    out
}

pub fn page_strip(window: &PageWindow) -> String {
    let pages = window.total_pages();
    if pages == 0 {
        return "no pages".to_string();
    }
    let mut parts = Vec::new();
    if window.has_prev() {
        parts.push("<".to_string());
    }
    for page in window.buttons() {
        if page == window.current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.has_next() {
        parts.push(">".to_string());
    }
    format!(
        "{}   page {} of {}, {} tasks",
        parts.join(" "),
        window.current_page,
        pages,
        window.total
    )
}

pub fn draft(draft: &TaskDraft) {
    println!("{}", draft_summary(draft));
}

pub fn draft_summary(draft: &TaskDraft) -> String {
    let mut out = format!(
        "draft: type={} status={}",
        draft
            .task_type
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "<unset>".to_string()),
        draft.status
    );
    if let Some(payload) = &draft.payload {
        out.push_str(&format!(" payload={:?}", payload));
    }
    if let Some(priority) = draft.priority {
        out.push_str(&format!(" priority={}", priority));
    }
    if let Some(max_retry) = draft.max_retry {
        out.push_str(&format!(" max_retry={}", max_retry));
    }
    out
}

pub fn board(board: &StatusBoard) {
    println!("{}", board_summary(board));
    println!("Schedulers:");
    match &board.schedulers {
        Ok(items) if items.is_empty() => println!("  none"),
        Ok(items) => items.iter().for_each(|s| println!("  {}", scheduler_card(s))),
        Err(err) => println!("  failed to load: {}", err),
    }
    println!("Workers:");
    match &board.workers {
        Ok(items) if items.is_empty() => println!("  none"),
        Ok(items) => items.iter().for_each(|w| println!("  {}", worker_card(w))),
        Err(err) => println!("  failed to load: {}", err),
    }
}

pub fn board_summary(board: &StatusBoard) -> String {
    let leader = board
        .leader()
        .map(|s| s.id.as_str())
        .unwrap_or("none elected");
    if board.is_healthy() {
        format!("cluster: leader {}", leader)
    } else {
        format!("cluster: leader {} (status partially unavailable)", leader)
    }
}

pub fn scheduler_card(s: &SchedulerStatus) -> String {
    card(&s.id, &s.status, s.is_leader, s.heart_beat.as_ref())
}

pub fn worker_card(w: &WorkerStatus) -> String {
    card(&w.id, &w.status, w.is_leader, w.heart_beat.as_ref())
}

fn card(id: &str, status: &str, leader: bool, heart_beat: Option<&DateTime<Utc>>) -> String {
    let mut out = format!("{}  {}", id, status);
    if leader {
        out.push_str("  (leader)");
    }
    if let Some(at) = heart_beat {
        out.push_str(&format!(
            "  heartbeat {}",
            at.with_timezone(&Local).format("%-H:%M:%S")
        ));
    }
    out
}

pub fn config(cfg: &CLIConfig, window: &PageWindow) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  page: {}", window.current_page);
    println!("  page size: {}", window.page_size);
    println!("  verbose: {}", cfg.verbose);
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

pub fn api_error(context: &str, err: &ApiError) {
    error(&api_error_message(context, err));
}

pub fn api_error_message(context: &str, err: &ApiError) -> String {
    match err {
        ApiError::Transport { status: None, .. } => {
            format!("{}: {} (backend unreachable, retry when it is back)", context, err)
        }
        ApiError::Transport {
            status: Some(code), ..
        } => format!("{}: {} (backend returned {})", context, err, code),
        _ => format!("{}: {}", context, err),
    }
}

pub fn page_out_of_range(page: usize, pages: usize) -> String {
    if pages == 0 {
        return "no pages loaded yet, use /tasks to load the list".to_string();
    }
    format!("no page {}, pages run 1..={}", page, pages)
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
