use axum::{
	extract::State,
	response::{IntoResponse, Response},
	Extension, Json,
};
use hyper::StatusCode;
use serde_json::json;

use crate::{
	auth::{has_admin_permission, CurrentSession},
	error::ApiError,
	state::AppState,
};

/// Lists every user, passwords included, for admins only.
pub async fn get_user_list(State(state): State<AppState>, Extension(session): Extension<CurrentSession>) -> Result<Response, ApiError> {
	if !has_admin_permission(&session.user.name, &state.users) {
		return Err(ApiError::Forbidden);
	}
	Ok((StatusCode::OK, Json(json!({"user_list": state.users.as_slice(), "successful": true}))).into_response())
}
