//! Server application core modules.
//!
//! This module contains all server-side functionality of the turf booking platform: HTTP
//! routing, controllers, services holding the booking, split payment and social rules,
//! repositories over the database, and the error taxonomy shared by all of them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
