#![allow(dead_code)]

use std::net::SocketAddr;

use cars_api::{app, AppState};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;

pub const ADMIN: (&str, &str) = ("qxf2", "qxf2");
pub const NON_ADMINS: [(&str, &str); 3] = [("eric", "testqxf2"), ("morgan", "testqxf2"), ("jack", "qxf2")];

pub struct TestApp {
	pub base: String,
	pub http: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
	let addr = listener.local_addr().expect("local addr");
	let router = app(AppState::new(100));
	tokio::spawn(async move {
		axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
			.await
			.expect("serve");
	});
	TestApp {
		base: format!("http://{}", addr),
		http: reqwest::Client::new(),
	}
}

impl TestApp {
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base, path)
	}

	/// A client with its own cookie store, so it keeps one session across calls.
	pub fn caller(&self, (user, password): (&'static str, &'static str)) -> Caller<'_> {
		Caller {
			app: self,
			http: reqwest::Client::builder().cookie_store(true).build().expect("build client"),
			user,
			password,
		}
	}
}

pub struct Caller<'a> {
	app: &'a TestApp,
	http: reqwest::Client,
	user: &'static str,
	password: &'static str,
}

impl Caller<'_> {
	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		self.http
			.request(method, self.app.url(path))
			.basic_auth(self.user, Some(self.password))
	}

	async fn send(&self, request: RequestBuilder) -> (StatusCode, Value) {
		let response = request.send().await.expect("request failed");
		let status = response.status();
		let body = response.json::<Value>().await.unwrap_or(Value::Null);
		(status, body)
	}

	pub async fn call(&mut self, method: Method, path: &str) -> (StatusCode, Value) {
		self.send(self.request(method, path)).await
	}

	pub async fn call_json(&mut self, method: Method, path: &str, body: Value) -> (StatusCode, Value) {
		self.send(self.request(method, path).json(&body)).await
	}

	pub async fn call_raw(&mut self, method: Method, path: &str, body: &'static str) -> (StatusCode, Value) {
		self.send(self.request(method, path).body(body)).await
	}

	pub async fn get(&mut self, path: &str) -> (StatusCode, Value) {
		self.call(Method::GET, path).await
	}

	pub async fn cars(&mut self) -> Vec<Value> {
		let (status, body) = self.get("/cars").await;
		assert_eq!(status, StatusCode::OK);
		body["cars_list"].as_array().expect("cars_list").clone()
	}
}
