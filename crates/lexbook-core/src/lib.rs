//! Shared configuration, errors and route constants for the Lexbook workspace.

pub mod config;
pub mod constants;
pub mod error;
