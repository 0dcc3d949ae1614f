//! Utility types for controller request handling.
//!
//! This module provides the request extractors shared across controllers.

pub mod json;
pub mod query;
