//! HTTP Basic authentication and the admin permission check.

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use base64::{engine::general_purpose::STANDARD, Engine};
use hyper::header::{HeaderMap, AUTHORIZATION};
use log::{debug, warn};
use uuid::Uuid;

use crate::{
	error::ApiError,
	session::{session_cookie, session_id},
	state::AppState,
	users::{Permission, User},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
	Authorized(User),
	MissingCredentials,
	BadCredentials { username: String },
}

/// Attached to every authenticated request.
#[derive(Debug, Clone)]
pub struct CurrentSession {
	pub id: Uuid,
	pub user: User,
}

/// Decodes `Authorization: Basic ...`. A header that is not Basic or not
/// valid base64 counts as no credentials; a payload without `:` is a user
/// name with an empty password.
pub fn basic_credentials(headers: &HeaderMap) -> Option<Credentials> {
	let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
	let (scheme, encoded) = value.split_once(' ')?;
	if !scheme.eq_ignore_ascii_case("basic") {
		return None;
	}
	let decoded = STANDARD.decode(encoded.trim()).ok()?;
	let decoded = String::from_utf8(decoded).ok()?;
	let (username, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));
	Some(Credentials {
		username: username.to_owned(),
		password: password.to_owned(),
	})
}

/// Exactly one user record must match both name and password.
pub fn check_auth<'a>(username: &str, password: &str, users: &'a [User]) -> Option<&'a User> {
	let mut matches = users.iter().filter(|user| user.name == username && user.password == password);
	match (matches.next(), matches.next()) {
		(Some(user), None) => Some(user),
		_ => None,
	}
}

pub fn authenticate(headers: &HeaderMap, users: &[User]) -> AuthOutcome {
	let Some(credentials) = basic_credentials(headers) else {
		return AuthOutcome::MissingCredentials;
	};
	match check_auth(&credentials.username, &credentials.password, users) {
		Some(user) => AuthOutcome::Authorized(user.clone()),
		None => AuthOutcome::BadCredentials {
			username: credentials.username,
		},
	}
}

pub fn has_admin_permission(username: &str, users: &[User]) -> bool {
	users.iter().any(|user| user.name == username && user.perm == Permission::Admin)
}

/// Rejects unauthenticated requests, then makes sure the caller has a seeded session.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Result<Response, ApiError> {
	let user = match authenticate(request.headers(), &state.users) {
		AuthOutcome::Authorized(user) => user,
		AuthOutcome::MissingCredentials => return Err(ApiError::AuthenticationRequired),
		AuthOutcome::BadCredentials { username } => {
			warn!("rejected credentials for user '{}'", username);
			return Err(ApiError::AuthenticationFailed);
		}
	};

	let jar = CookieJar::from_headers(request.headers());
	let (id, created) = state.sessions.ensure(session_id(&jar))?;
	if created {
		debug!("started session {} for '{}'", id, user.name);
	}
	request.extensions_mut().insert(CurrentSession { id, user });

	let response = next.run(request).await;
	if created {
		return Ok((jar.add(session_cookie(id)), response).into_response());
	}
	Ok(response)
}
