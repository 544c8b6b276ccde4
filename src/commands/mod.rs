//! CLI commands

pub mod list;
pub mod search;
pub mod show;
pub mod tags;
pub mod utils;
