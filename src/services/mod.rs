// Service module exports

pub mod calendar;
pub mod drag;
pub mod event;
pub mod filter;
pub mod layout;
pub mod navigation;
pub mod settings;
