// Team Calendar Library
// People-aware calendar widget: views, filtering, drag-to-reschedule

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::{CalendarError, Result};
pub use services::calendar::{Calendar, CalendarObserver};
