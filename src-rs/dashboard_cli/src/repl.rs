use std::io;

use idtask_dashboard::api::HTTPClient;
use idtask_dashboard::view::StatusBoard;
use idtask_dashboard::{ApiError, LoadOutcome, TaskListController, TaskStatus, TaskType};
use tracing::debug;

use crate::models::CLIConfig;
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub tasks: TaskListController<HTTPClient>,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self {
            config,
            tasks: TaskListController::new(client),
        }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        self.show_board();
        let start = self.config.start_page;
        self.load(start);

        loop {
            render::prompt();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if !line.starts_with('/') {
                render::info("commands start with '/', type /help");
                continue;
            }
            if self.handle_command(&line) {
                break;
            }
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "tasks" => {
                if rest.is_empty() {
                    let page = self.tasks.current_page();
                    self.load(page);
                } else if let Ok(page) = rest.parse::<usize>() {
                    self.load(page);
                } else {
                    render::error("invalid page number");
                }
            }
            "page" => match rest.parse::<usize>() {
                Ok(page) => match self.tasks.go_to_page(page) {
                    Some(result) => self.show_load(result),
                    None => render::error(&render::page_out_of_range(
                        page,
                        self.tasks.window().total_pages(),
                    )),
                },
                Err(_) => render::error("invalid page number"),
            },
            "next" => match self.tasks.next_page() {
                Some(result) => self.show_load(result),
                None => render::info("already on the last page"),
            },
            "prev" => match self.tasks.prev_page() {
                Some(result) => self.show_load(result),
                None => render::info("already on the first page"),
            },
            "draft" => render::draft(self.tasks.draft()),
            "type" => match rest.parse::<TaskType>() {
                Ok(kind) => {
                    self.tasks.draft_mut().task_type = Some(kind);
                    render::draft(self.tasks.draft());
                }
                Err(err) => render::error(&err),
            },
            "status" => match rest.parse::<TaskStatus>() {
                Ok(status) => {
                    self.tasks.draft_mut().status = status;
                    render::draft(self.tasks.draft());
                }
                Err(err) => render::error(&err),
            },
            "payload" => {
                self.tasks.draft_mut().payload = if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                };
                render::draft(self.tasks.draft());
            }
            "priority" => match parse_optional::<i32>(rest) {
                Ok(value) => {
                    self.tasks.draft_mut().priority = value;
                    render::draft(self.tasks.draft());
                }
                Err(_) => render::error("invalid priority"),
            },
            "retry" => match parse_optional::<u32>(rest) {
                Ok(value) => {
                    self.tasks.draft_mut().max_retry = value;
                    render::draft(self.tasks.draft());
                }
                Err(_) => render::error("invalid retry count"),
            },
            "clear" => {
                self.tasks.reset_draft();
                render::info("form cleared");
            }
            "submit" => self.submit(),
            "board" => self.show_board(),
            "config" => render::config(&self.config, &self.tasks.window()),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.rebase(rest);
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn load(&mut self, page: usize) {
        let result = self.tasks.load_page(page);
        self.show_load(result);
    }

    fn show_load(&self, result: Result<LoadOutcome, ApiError>) {
        match result {
            Ok(LoadOutcome::Applied) => render::tasks(self.tasks.items(), &self.tasks.window()),
            Ok(LoadOutcome::Stale) => debug!("superseded page load ignored"),
            Err(err) => render::api_error("failed to load tasks", &err),
        }
    }

    fn submit(&mut self) {
        match self.tasks.create_task() {
            Ok(submitted) => {
                render::info("task submitted");
                self.show_load(submitted.refresh);
            }
            Err(err) => render::api_error("failed to submit task", &err),
        }
    }

    fn show_board(&self) {
        render::board(&StatusBoard::load(self.tasks.client()));
    }

    fn rebase(&mut self, url: &str) {
        let mut config = self.config.clone();
        config.base_url = url.to_string();
        match HTTPClient::new(config.client_config()) {
            Ok(client) => {
                let draft = self.tasks.draft().clone();
                self.config = config;
                self.tasks = TaskListController::new(client);
                *self.tasks.draft_mut() = draft;
                render::info("base url updated");
                self.load(1);
            }
            Err(err) => render::api_error("failed to switch base url", &err),
        }
    }
}

fn parse_optional<T: std::str::FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some)
}
