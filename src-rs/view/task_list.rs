use tracing::{debug, warn};

use super::pagination::{PageWindow, PAGE_SIZE};
use crate::api::client::RequestClient;
use crate::api::endpoints::{self, ListResult};
use crate::error::ApiError;
use crate::task::{Task, TaskDraft, BLANK_DRAFT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error(ApiError),
}

/// Handed out when a load is issued; only the most recent ticket may land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub page: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was issued after this one; the response was dropped.
    Stale,
}

/// Result of a successful submission. The task exists on the backend even if
/// the refresh that follows it fails.
#[derive(Debug, PartialEq, Eq)]
pub struct Submitted {
    pub refresh: Result<LoadOutcome, ApiError>,
}

pub struct TaskListController<C> {
    client: C,
    current_page: usize,
    total: usize,
    items: Vec<Task>,
    state: LoadState,
    draft: TaskDraft,
    issued: u64,
}

impl<C: RequestClient> TaskListController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            current_page: 1,
            total: 0,
            items: Vec::new(),
            state: LoadState::Idle,
            draft: BLANK_DRAFT,
            issued: 0,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.current_page, self.total)
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn reset_draft(&mut self) {
        self.draft = BLANK_DRAFT;
    }

    /// Issues a new load for `page`, superseding any load still in flight.
    pub fn begin_load(&mut self, page: usize) -> LoadTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        let ticket = LoadTicket {
            seq: self.issued,
            page: page.max(1),
        };
        debug!(seq = ticket.seq, page = ticket.page, "loading task page");
        ticket
    }

    /// Performs the request for a ticket without touching controller state.
    pub fn fetch(&self, ticket: LoadTicket) -> Result<ListResult, ApiError> {
        endpoints::list_tasks(&self.client, ticket.page, PAGE_SIZE)
    }

    /// Lands a response. Anything but the latest ticket is discarded; a failure
    /// leaves page, items and total as they were.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ListResult, ApiError>,
    ) -> Result<LoadOutcome, ApiError> {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                page = ticket.page,
                "discarding stale task page"
            );
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(mut list) => {
                if list.items.len() > PAGE_SIZE {
                    warn!(
                        page = ticket.page,
                        got = list.items.len(),
                        "backend returned more rows than the page size"
                    );
                    list.items.truncate(PAGE_SIZE);
                }
                self.current_page = ticket.page;
                self.items = list.items;
                self.total = list.total;
                self.state = LoadState::Loaded;
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                warn!(page = ticket.page, error = %err, "task page load failed");
                self.state = LoadState::Error(err.clone());
                Err(err)
            }
        }
    }

    pub fn load_page(&mut self, page: usize) -> Result<LoadOutcome, ApiError> {
        let ticket = self.begin_load(page);
        let result = self.fetch(ticket);
        self.apply_load(ticket, result)
    }

    pub fn refresh(&mut self) -> Result<LoadOutcome, ApiError> {
        self.load_page(self.current_page)
    }

    /// Loads `page` if it is one of the pages the window can show.
    pub fn go_to_page(&mut self, page: usize) -> Option<Result<LoadOutcome, ApiError>> {
        if !self.window().contains(page) {
            return None;
        }
        Some(self.load_page(page))
    }

    pub fn next_page(&mut self) -> Option<Result<LoadOutcome, ApiError>> {
        if !self.window().has_next() {
            return None;
        }
        Some(self.load_page(self.current_page + 1))
    }

    pub fn prev_page(&mut self) -> Option<Result<LoadOutcome, ApiError>> {
        if !self.window().has_prev() {
            return None;
        }
        Some(self.load_page(self.current_page - 1))
    }

    /// Submits the draft. On success the draft goes back to blank and the
    /// current page is reloaded once; nothing is inserted locally.
    pub fn create_task(&mut self) -> Result<Submitted, ApiError> {
        if let Err(err) = endpoints::create_task(&self.client, &self.draft) {
            warn!(error = %err, "task submission failed");
            return Err(err);
        }
        self.reset_draft();
        let refresh = self.refresh();
        Ok(Submitted { refresh })
    }
}
