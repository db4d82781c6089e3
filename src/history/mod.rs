//! Local lookup history (flat JSON file)

pub mod store;
