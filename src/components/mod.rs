//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod progress_panel;
mod session_badge;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use progress_panel::ProgressPanel;
pub use session_badge::SessionBadge;
pub use task_row::TaskRow;
