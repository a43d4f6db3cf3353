// Module exports for models

pub mod color;
pub mod event;
pub mod person;
pub mod settings;
pub mod view;
