//! Server application models.
//!
//! Application state shared by handlers and the typed forms of the enumerated columns that
//! the schema stores as lowercase strings.

pub mod app;
pub mod status;
