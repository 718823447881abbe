pub mod action_executor;
pub mod config;
pub mod core_service;
pub mod history;
pub mod logging;
pub mod model;
pub mod overlay_state;
pub mod overlay_view;
pub mod runtime;
pub mod search;
pub mod terminal;
