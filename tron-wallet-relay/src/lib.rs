//! HTTP relay exposing wallet creation and TRX/TRC-20 transfers over JSON.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod validators;
