//! Request extractors that report malformed input as [`AppError::BadRequest`]
//! instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Missing fields, wrong types and unparseable dates all
/// surface through the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor, e.g. a non-integer `{id}` segment.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
