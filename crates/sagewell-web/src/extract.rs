//! JSON body extractor whose rejections render as `ApiError` (HTTP 400).

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use sagewell_common::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: serde::Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
