mod add_task_form;
mod ai_panel;
mod auth_panel;
mod notice_line;
mod sidebar;
mod task_filters;
mod task_list;
mod task_list_row;
mod telegram_panel;
mod theme_toggle;

pub use add_task_form::AddTaskForm;
pub use ai_panel::AiPanel;
pub use auth_panel::AuthPanel;
pub use notice_line::NoticeLine;
pub use sidebar::Sidebar;
pub use task_filters::TaskFilters;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use telegram_panel::TelegramPanel;
pub use theme_toggle::ThemeToggle;
