use axum::{
	body::Bytes,
	extract::{Path, Query, State},
	response::{IntoResponse, Response},
	Extension, Json,
};
use hyper::StatusCode;
use log::info;
use serde_json::json;

use super::car::{filter_by_type, find_by_name, Car, CarQuery};
use crate::{
	auth::CurrentSession,
	body::{json_object, JsonObject},
	error::ApiError,
	state::AppState,
};

enum UpdateOutcome {
	Updated(Car),
	NotJson,
	NoCar,
}

fn lookup_response(car: Option<Car>) -> Response {
	match car {
		Some(car) => (StatusCode::OK, Json(json!({"car": car, "successful": true}))).into_response(),
		None => (StatusCode::OK, Json(json!({"message": "No car found", "successful": false}))).into_response(),
	}
}

pub async fn get_cars(State(state): State<AppState>, Extension(session): Extension<CurrentSession>) -> Result<Response, ApiError> {
	let cars = state.sessions.with_cars(session.id, |cars| cars.clone())?;
	Ok(Json(json!({"cars_list": cars, "successful": true})).into_response())
}

pub async fn get_car_details(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Path(name): Path<String>,
) -> Result<Response, ApiError> {
	let car = state.sessions.with_cars(session.id, |cars| find_by_name(cars, &name).cloned())?;
	Ok(lookup_response(car))
}

/// `GET /cars/add` is a lookup for a car named `add`, since only POST adds.
pub async fn get_car_named_add(state: State<AppState>, session: Extension<CurrentSession>) -> Result<Response, ApiError> {
	get_car_details(state, session, Path("add".to_owned())).await
}

pub async fn find_car(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
	let params = CarQuery::from_pairs(pairs);
	let Some(name) = params.selected_name() else {
		return Ok(Json(json!({"message": "Not enough url_params", "successful": false})).into_response());
	};
	let car = state.sessions.with_cars(session.id, |cars| find_by_name(cars, name).cloned())?;
	Ok(lookup_response(car))
}

pub async fn add_car(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	body: Bytes,
) -> Result<Response, ApiError> {
	let car = Car::from_json(&json_object(&body)?)?;
	state.sessions.with_cars(session.id, |cars| cars.push(car.clone()))?;
	info!("session {} added car '{}'", session.id, car.name);
	Ok((StatusCode::OK, Json(json!({"car": car, "successful": true}))).into_response())
}

pub async fn update_car(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Path(name): Path<String>,
	body: Bytes,
) -> Result<Response, ApiError> {
	let fields: Option<JsonObject> = json_object(&body).ok().filter(|object| object.contains_key("name"));

	let outcome = state.sessions.with_cars(session.id, |cars: &mut Vec<Car>| -> Result<UpdateOutcome, ApiError> {
		let Some(car) = cars.iter_mut().find(|car| car.name == name) else {
			return Ok(UpdateOutcome::NoCar);
		};
		let Some(fields) = fields else {
			return Ok(UpdateOutcome::NotJson);
		};
		// every field is read before anything is overwritten
		let replacement = Car::from_json(&fields)?;
		*car = replacement.clone();
		Ok(UpdateOutcome::Updated(replacement))
	})??;

	let response = match outcome {
		UpdateOutcome::Updated(car) => {
			info!("session {} updated car '{}'", session.id, name);
			(StatusCode::OK, Json(json!({"response": {"car": car, "successful": true}})))
		}
		UpdateOutcome::NotJson => (
			StatusCode::NOT_FOUND,
			Json(json!({"response": {"message": "Not a json", "successful": false}})),
		),
		UpdateOutcome::NoCar => (
			StatusCode::NOT_FOUND,
			Json(json!({"response": {"message": "No car found", "successful": false}})),
		),
	};
	Ok(response.into_response())
}

pub async fn remove_car(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Path(name): Path<String>,
) -> Result<Response, ApiError> {
	let removed = state.sessions.with_cars(session.id, |cars| {
		cars.iter().position(|car| car.name == name).map(|index| cars.remove(index))
	})?;
	let car = removed.ok_or(ApiError::NotFound)?;
	info!("session {} removed car '{}'", session.id, car.name);
	Ok((StatusCode::OK, Json(json!({"car": car, "successful": true}))).into_response())
}

pub async fn filter_cars(
	State(state): State<AppState>,
	Extension(session): Extension<CurrentSession>,
	Path(car_type): Path<String>,
) -> Result<Response, ApiError> {
	let cars = state.sessions.with_cars(session.id, |cars| filter_by_type(cars, &car_type))?;
	Ok(Json(json!({"cars": cars})).into_response())
}
