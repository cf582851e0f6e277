use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
	Admin,
	NonAdmin,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
	pub name: String,
	pub password: String,
	pub perm: Permission,
}

impl User {
	fn new(name: &str, password: &str, perm: Permission) -> Self {
		User {
			name: name.to_owned(),
			password: password.to_owned(),
			perm,
		}
	}
}

/// Fixed credential store. Passwords are stored and served in plain text.
pub fn default_users() -> Vec<User> {
	vec![
		User::new("qxf2", "qxf2", Permission::Admin),
		User::new("eric", "testqxf2", Permission::NonAdmin),
		User::new("morgan", "testqxf2", Permission::NonAdmin),
		User::new("jack", "qxf2", Permission::NonAdmin),
	]
}
