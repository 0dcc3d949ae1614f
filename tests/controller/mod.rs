//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, and the status and JSON body of the
//! resulting response are checked.

mod account;
mod admin;
mod booking;
mod router;
mod social;
mod turf;

use turfbook_test_utils::prelude::*;

use crate::util::{body_json, respond};
