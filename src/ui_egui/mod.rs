pub mod actions;
mod app;
pub mod drag;
pub mod shortcuts;
pub mod views;

pub use actions::CalendarAction;
pub use app::CalendarApp;
pub use views::CalendarWidget;
