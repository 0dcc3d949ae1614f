use axum::extract::FromRequestParts;

use crate::server::error::Error;

/// Query string extractor reporting unparsable parameters as a 400 `{"error": ...}` through
/// [`Error`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);
