//! Library components of the `olympics` command-line tool.

pub mod config;
pub mod logging;
pub mod render;
