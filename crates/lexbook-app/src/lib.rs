//! HTTP front for the availability wizard.

pub mod app;
pub mod backend_handler;
pub mod config;
pub mod error;
pub mod schedule_handler;
