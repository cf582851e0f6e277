mod common;

use common::{spawn_app, ADMIN, NON_ADMINS};
use reqwest::{Method, StatusCode};
use serde_json::json;

fn customer() -> serde_json::Value {
	json!({"customer_name": "Rohan", "city": "Bangalore"})
}

#[tokio::test]
async fn test_register_list_and_delete() {
	let app = spawn_app().await;
	let mut caller = app.caller(ADMIN);

	let (status, body) = caller
		.call_json(Method::POST, "/register/car?car_name=Swift&brand=Maruti", customer())
		.await;
	assert_eq!(status, StatusCode::OK);
	let registered = body["registered_car"].clone();
	assert_eq!(registered["car"]["name"], json!("Swift"));
	assert_eq!(registered["customer_details"], customer());
	assert_eq!(registered["successful"], json!(true));
	let token = registered["registration_token"].as_u64().unwrap();
	assert!(token < 4);

	let (status, body) = caller.get("/register/").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({"registered": [registered], "successful": true}));

	let (status, body) = caller.call(Method::DELETE, "/register/car/delete/").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({"successful": true}));

	let (_, body) = caller.get("/register/").await;
	assert_eq!(body["registered"], json!([]));

	let (status, _) = caller.call(Method::DELETE, "/register/car/delete/").await;
	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_registrations_are_shared_across_sessions() {
	let app = spawn_app().await;
	let mut admin = app.caller(ADMIN);
	let mut other = app.caller(NON_ADMINS[1]);

	admin
		.call_json(Method::POST, "/register/car?car_name=City&brand=Honda", customer())
		.await;
	other
		.call_json(Method::POST, "/register/car?car_name=Vento&brand=Volkswagen", customer())
		.await;

	let (_, body) = other.get("/register/").await;
	let names: Vec<_> = body["registered"].as_array().unwrap().iter().map(|r| r["car"]["name"].clone()).collect();
	assert_eq!(names, [json!("City"), json!("Vento")]);

	// delete always drops the oldest entry
	other.call(Method::DELETE, "/register/car/delete/").await;
	let (_, body) = admin.get("/register/").await;
	assert_eq!(body["registered"][0]["car"]["name"], json!("Vento"));
}

#[tokio::test]
async fn test_register_uses_session_list() {
	let app = spawn_app().await;
	let mut caller = app.caller(ADMIN);
	let polo = json!({"name": "Polo", "brand": "Volkswagen", "price_range": "5-8 lacs", "car_type": "hatchback"});
	caller.call_json(Method::POST, "/cars/add", polo.clone()).await;

	let (status, body) = caller
		.call_json(Method::POST, "/register/car?car_name=Polo&brand=Volkswagen", customer())
		.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["registered_car"]["car"], polo);
}

#[tokio::test]
async fn test_register_faults() {
	let app = spawn_app().await;
	let mut caller = app.caller(ADMIN);

	for path in ["/register/car", "/register/car?car_name=Swift", "/register/car?car_name=Polo&brand=Volkswagen"] {
		let (status, _) = caller.call_json(Method::POST, path, customer()).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
	}

	let (status, _) = caller
		.call_json(Method::POST, "/register/car?car_name=Swift&brand=Maruti", json!({"customer_name": "Rohan"}))
		.await;
	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

	let (_, body) = caller.get("/register/").await;
	assert_eq!(body["registered"], json!([]));
}
