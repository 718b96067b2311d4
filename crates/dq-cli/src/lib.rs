//! Command-line front end for the data-quality profiler.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
