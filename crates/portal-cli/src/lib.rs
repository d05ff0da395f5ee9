//! Library half of the `portal` binary: configuration, logging and table
//! rendering.

pub mod config;
pub mod logging;
pub mod render;
