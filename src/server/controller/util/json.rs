use axum::extract::FromRequest;

use crate::server::error::Error;

/// JSON body extractor reporting malformed bodies as `{"error": ...}` through [`Error`]
/// instead of axum's plain text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
