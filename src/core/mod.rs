//! Core types shared by all commands

pub mod model;
pub mod paths;
pub mod render;
pub mod util;
