//! Utility modules: configuration, logging and timing

pub mod config;
pub mod logger;
pub mod timer;
