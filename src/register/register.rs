use axum::{
	body::Bytes,
	extract::{Query, State},
	response::{IntoResponse, Response},
	Extension, Json,
};
use hyper::StatusCode;
use log::info;
use serde_json::json;

use super::registry::CustomerDetails;
use crate::{
	auth::CurrentSession,
	body::json_object,
	cars::{find_by_name, CarQuery},
	error::ApiError,
	state::AppState,
};

/// Registers a car from the caller's session list against a customer.
///
/// The car is only looked up when both `car_name` and `brand` are given; with
/// no car selected the request fails after the customer details are read.
pub async fn register_car(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Query(pairs): Query<Vec<(String, String)>>,
	body: Bytes,
) -> Result<Response, ApiError> {
	let params = CarQuery::from_pairs(pairs);
	let car = match params.selected_name() {
		Some(name) => state.sessions.with_cars(session.id, |cars| find_by_name(cars, name).cloned())?,
		None => None,
	};
	let customer_details = CustomerDetails::from_json(&json_object(&body)?)?;
	let car = car.ok_or(ApiError::NoCarSelected)?;

	let registered_car = state.registry.register(car, customer_details)?;
	info!(
		"registered '{}' for {} with token {}",
		registered_car.car.name, registered_car.customer_details.customer_name, registered_car.registration_token
	);
	Ok(Json(json!({"registered_car": registered_car})).into_response())
}

pub async fn get_registered_cars(State(state): State<AppState>) -> Result<Response, ApiError> {
	let registered = state.registry.all()?;
	Ok(Json(json!({"registered": registered, "successful": true})).into_response())
}

pub async fn delete_registered_car(State(state): State<AppState>) -> Result<Response, ApiError> {
	let removed = state.registry.remove_head()?;
	info!("deleted registration of '{}'", removed.car.name);
	Ok((StatusCode::OK, Json(json!({"successful": true}))).into_response())
}
