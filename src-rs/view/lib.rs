pub mod pagination;
pub mod status_board;
pub mod task_list;

pub use pagination::{total_pages, PageWindow, MAX_PAGE_BUTTONS, PAGE_SIZE};
pub use status_board::StatusBoard;
pub use task_list::{LoadOutcome, LoadState, LoadTicket, Submitted, TaskListController};
