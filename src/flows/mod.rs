//! Per-command orchestration: fetch + extract + history + render

pub mod history;
pub mod home;
pub mod lookup;
