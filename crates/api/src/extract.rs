//! Request extractors whose rejections use the [`AppError`] JSON shape.
//!
//! Axum's own `Json` and `Query` reject with plain-text 400/415/422 bodies;
//! these wrappers turn every rejection into a 400 `BAD_REQUEST`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
