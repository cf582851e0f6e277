#[allow(clippy::module_inception)]
mod register;
mod registry;

pub use register::{delete_registered_car, get_registered_cars, register_car};
pub use registry::{CustomerDetails, RegisteredCar, Registry, REGISTRATION_TOKENS};
