use serde_json::{Map, Value};

use crate::error::ApiError;

pub type JsonObject = Map<String, Value>;

pub fn json_object(body: &[u8]) -> Result<JsonObject, ApiError> {
	match serde_json::from_slice::<Value>(body)? {
		Value::Object(map) => Ok(map),
		_ => Err(ApiError::NotAnObject),
	}
}

// Non-string values count as absent.
pub fn string_field(object: &JsonObject, key: &'static str) -> Result<String, ApiError> {
	object
		.get(key)
		.and_then(Value::as_str)
		.map(str::to_owned)
		.ok_or(ApiError::MissingField(key))
}
