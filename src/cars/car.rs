use serde::{Deserialize, Serialize};

use crate::{
	body::{string_field, JsonObject},
	error::ApiError,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Car {
	pub name: String,
	pub brand: String,
	pub price_range: String,
	pub car_type: String,
}

impl Car {
	pub fn new(name: &str, brand: &str, price_range: &str, car_type: &str) -> Self {
		Car {
			name: name.to_owned(),
			brand: brand.to_owned(),
			price_range: price_range.to_owned(),
			car_type: car_type.to_owned(),
		}
	}

	/// Reads all four fields from a request body, failing on the first one that is absent.
	pub fn from_json(object: &JsonObject) -> Result<Self, ApiError> {
		Ok(Car {
			name: string_field(object, "name")?,
			brand: string_field(object, "brand")?,
			price_range: string_field(object, "price_range")?,
			car_type: string_field(object, "car_type")?,
		})
	}
}

/// The list every new session starts from.
pub fn default_cars() -> Vec<Car> {
	vec![
		Car::new("Swift", "Maruti", "3-5 lacs", "hatchback"),
		Car::new("Creta", "Hyundai", "8-14 lacs", "hatchback"),
		Car::new("City", "Honda", "3-6 lacs", "sedan"),
		Car::new("Vento", "Volkswagen", "7-10 lacs", "sedan"),
	]
}

pub fn find_by_name<'a>(cars: &'a [Car], name: &str) -> Option<&'a Car> {
	cars.iter().find(|car| car.name == name)
}

pub fn filter_by_type(cars: &[Car], car_type: &str) -> Vec<Car> {
	cars.iter().filter(|car| car.car_type == car_type).cloned().collect()
}

/// `car_name` and `brand` query parameters shared by the find and register routes.
#[derive(Debug, Default)]
pub struct CarQuery {
	pub car_name: Option<String>,
	pub brand: Option<String>,
}

impl CarQuery {
	/// Builds from raw query pairs; a repeated parameter keeps its first value.
	pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
		let mut query = CarQuery::default();
		for (key, value) in pairs {
			let slot = match key.as_str() {
				"car_name" => &mut query.car_name,
				"brand" => &mut query.brand,
				_ => continue,
			};
			slot.get_or_insert(value);
		}
		query
	}

	/// The name to look up, present only when both parameters are non-empty.
	/// `brand` gates the lookup but never takes part in matching.
	pub fn selected_name(&self) -> Option<&str> {
		match (self.car_name.as_deref(), self.brand.as_deref()) {
			(Some(name), Some(brand)) if !name.is_empty() && !brand.is_empty() => Some(name),
			_ => None,
		}
	}
}
