//! Cars API: an in-memory car catalog behind HTTP Basic auth, built for
//! practicing API test automation.
//!
//! Every client session gets its own copy of the catalog. Registrations are
//! shared across all sessions.

pub mod auth;
pub mod body;
pub mod cars;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod register;
pub mod session;
pub mod state;
pub mod users;

use axum::{
	middleware,
	routing::{delete, get, post, put},
	Router,
};
use tower_http::cors::CorsLayer;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
	let protected = Router::new()
		.route("/cars", get(cars::get_cars))
		.route("/cars/find", get(cars::find_car))
		.route("/cars/add", get(cars::get_car_named_add).post(cars::add_car))
		.route("/cars/:name", get(cars::get_car_details))
		.route("/cars/update/:name", put(cars::update_car))
		.route("/cars/remove/:name", delete(cars::remove_car))
		.route("/cars/filter/:car_type", get(cars::filter_cars))
		.route("/register/car", post(register::register_car))
		.route("/register/", get(register::get_registered_cars))
		.route("/register/car/delete/", delete(register::delete_registered_car))
		.route("/users", get(users::get_user_list))
		.route_layer(middleware::from_fn_with_state(state.clone(), auth::require_auth));

	Router::new()
		.route("/", get(index::index_page))
		.merge(protected)
		.layer(middleware::from_fn(logging::log_requests))
		.layer(CorsLayer::permissive())
		.with_state(state)
}
