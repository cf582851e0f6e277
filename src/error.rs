use axum::{
	response::{IntoResponse, Response},
	Json,
};
use hyper::{
	header::{HeaderValue, WWW_AUTHENTICATE},
	StatusCode,
};
use log::error;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

pub const BASIC_CHALLENGE: &str = r#"Basic realm="Example""#;

#[derive(Error, Debug)]
pub enum ApiError {
	#[error("Require Basic Authentication")]
	AuthenticationRequired,

	#[error("Authenticate with proper credentials")]
	AuthenticationFailed,

	#[error("You are not permitted to access this resource")]
	Forbidden,

	#[error("Not Found")]
	NotFound,

	#[error("missing field `{0}` in request body")]
	MissingField(&'static str),

	#[error("request body is not valid JSON: {0}")]
	InvalidJson(#[from] serde_json::Error),

	#[error("request body is not a JSON object")]
	NotAnObject,

	#[error("no car selected for registration")]
	NoCarSelected,

	#[error("registered car list is empty")]
	EmptyRegistry,

	#[error("session {0} has no car list")]
	MissingSession(Uuid),

	#[error("shared state lock poisoned")]
	StatePoisoned,
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::AuthenticationRequired | ApiError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
			ApiError::Forbidden => StatusCode::FORBIDDEN,
			ApiError::NotFound => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		match &self {
			ApiError::AuthenticationRequired | ApiError::AuthenticationFailed => {
				let mut response = (status, Json(json!({ "message": self.to_string() }))).into_response();
				response
					.headers_mut()
					.insert(WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_CHALLENGE));
				response
			}
			ApiError::Forbidden => (status, Json(json!({ "message": self.to_string(), "successful": false }))).into_response(),
			ApiError::NotFound => (status, Json(json!({ "message": self.to_string() }))).into_response(),
			_ => {
				error!("request failed: {}", self);
				(status, Json(json!({ "message": "Internal Server Error" }))).into_response()
			}
		}
	}
}
