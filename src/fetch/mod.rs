//! Fetch layer: URL building and blocking HTTP GET

pub mod client;
pub mod urls;
