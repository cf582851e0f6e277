use std::sync::{Mutex, MutexGuard};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
	body::{string_field, JsonObject},
	cars::Car,
	error::ApiError,
};

/// Tokens are drawn from `0..REGISTRATION_TOKENS` and may repeat.
pub const REGISTRATION_TOKENS: u8 = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CustomerDetails {
	pub customer_name: String,
	pub city: String,
}

impl CustomerDetails {
	pub fn from_json(object: &JsonObject) -> Result<Self, ApiError> {
		Ok(CustomerDetails {
			customer_name: string_field(object, "customer_name")?,
			city: string_field(object, "city")?,
		})
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegisteredCar {
	pub car: Car,
	pub customer_details: CustomerDetails,
	pub registration_token: u8,
	pub successful: bool,
}

/// Process-wide list of registrations, shared by every session.
#[derive(Default)]
pub struct Registry {
	registered: Mutex<Vec<RegisteredCar>>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> Result<MutexGuard<'_, Vec<RegisteredCar>>, ApiError> {
		self.registered.lock().map_err(|_| ApiError::StatePoisoned)
	}

	pub fn register(&self, car: Car, customer_details: CustomerDetails) -> Result<RegisteredCar, ApiError> {
		let registered_car = RegisteredCar {
			car,
			customer_details,
			registration_token: rand::thread_rng().gen_range(0..REGISTRATION_TOKENS),
			successful: true,
		};
		self.lock()?.push(registered_car.clone());
		Ok(registered_car)
	}

	pub fn all(&self) -> Result<Vec<RegisteredCar>, ApiError> {
		Ok(self.lock()?.clone())
	}

	/// Drops the oldest registration, whichever it is. An empty list is a fault.
	pub fn remove_head(&self) -> Result<RegisteredCar, ApiError> {
		let mut registered = self.lock()?;
		if registered.is_empty() {
			return Err(ApiError::EmptyRegistry);
		}
		Ok(registered.remove(0))
	}
}
