//! Per-cycle orchestration: fetch bars, classify, notify.

pub mod config;
pub mod cycle;
pub mod message;
pub mod notify;
