//! Server-side sessions holding each client's private car list.
//!
//! A session is keyed by a random id carried in the `session` cookie. The
//! list is seeded from a copy of the default cars the first time an
//! authenticated request arrives without a known id.

use std::{
	collections::{HashMap, VecDeque},
	sync::{Mutex, MutexGuard},
};

use axum_extra::extract::cookie::{Cookie, CookieJar};
use log::debug;
use uuid::Uuid;

use crate::{cars::Car, error::ApiError};

pub const SESSION_COOKIE: &str = "session";

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug)]
pub struct SessionRecord {
	cars: Vec<Car>,
}

#[derive(Default)]
struct Sessions {
	records: HashMap<Uuid, SessionRecord>,
	// least recently used first
	order: VecDeque<Uuid>,
}

impl Sessions {
	fn touch(&mut self, id: Uuid) {
		if let Some(index) = self.order.iter().position(|known| *known == id) {
			self.order.remove(index);
		}
		self.order.push_back(id);
	}
}

/// Each call takes the lock once and releases it before returning, so a
/// request sees a consistent list for the duration of a single operation.
pub struct SessionStore {
	seed: Vec<Car>,
	max_sessions: usize,
	inner: Mutex<Sessions>,
}

impl SessionStore {
	pub fn new(seed: Vec<Car>, max_sessions: usize) -> Self {
		SessionStore {
			seed,
			max_sessions: max_sessions.max(1),
			inner: Mutex::new(Sessions::default()),
		}
	}

	fn lock(&self) -> Result<MutexGuard<'_, Sessions>, ApiError> {
		self.inner.lock().map_err(|_| ApiError::StatePoisoned)
	}

	/// Returns the id to use for this request and whether it was just created.
	/// Known sessions move to the back of the eviction queue.
	pub fn ensure(&self, id: Option<Uuid>) -> Result<(Uuid, bool), ApiError> {
		let mut sessions = self.lock()?;
		if let Some(id) = id.filter(|id| sessions.records.contains_key(id)) {
			sessions.touch(id);
			return Ok((id, false));
		}

		let id = Uuid::new_v4();
		sessions.records.insert(id, SessionRecord { cars: self.seed.clone() });
		sessions.order.push_back(id);
		while sessions.records.len() > self.max_sessions {
			let Some(idle) = sessions.order.pop_front() else {
				break;
			};
			sessions.records.remove(&idle);
			debug!("evicted idle session {}", idle);
		}
		Ok((id, true))
	}

	pub fn with_cars<R>(&self, id: Uuid, f: impl FnOnce(&mut Vec<Car>) -> R) -> Result<R, ApiError> {
		let mut sessions = self.lock()?;
		let record = sessions.records.get_mut(&id).ok_or(ApiError::MissingSession(id))?;
		Ok(f(&mut record.cars))
	}

	#[cfg(test)]
	pub(crate) fn count(&self) -> Result<usize, ApiError> {
		Ok(self.lock()?.records.len())
	}
}

pub fn session_id(jar: &CookieJar) -> Option<Uuid> {
	jar.get(SESSION_COOKIE).and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

pub fn session_cookie(id: Uuid) -> Cookie<'static> {
	Cookie::build((SESSION_COOKIE, id.to_string())).http_only(true).path("/").build()
}
