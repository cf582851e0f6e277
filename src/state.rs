use std::sync::Arc;

use crate::{
	cars::{default_cars, Car},
	register::Registry,
	session::SessionStore,
	users::{default_users, User},
};

/// Everything the handlers share. The user list is read-only; the session
/// store and registry guard their own contents.
#[derive(Clone)]
pub struct AppState {
	pub users: Arc<Vec<User>>,
	pub sessions: Arc<SessionStore>,
	pub registry: Arc<Registry>,
}

impl AppState {
	pub fn new(max_sessions: usize) -> Self {
		Self::with_data(default_users(), default_cars(), max_sessions)
	}

	pub fn with_data(users: Vec<User>, seed: Vec<Car>, max_sessions: usize) -> Self {
		AppState {
			users: Arc::new(users),
			sessions: Arc::new(SessionStore::new(seed, max_sessions)),
			registry: Arc::new(Registry::new()),
		}
	}
}
