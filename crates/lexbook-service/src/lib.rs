//! Availability wizard state and the client for the external availability backend.

pub mod availability;
pub mod error;
