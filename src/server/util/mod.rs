//! Utility functions shared by services.

pub mod credential;
pub mod money;
pub mod time;
