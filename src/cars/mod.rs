mod car;
#[allow(clippy::module_inception)]
mod cars;

pub use car::{default_cars, filter_by_type, find_by_name, Car, CarQuery};
pub use cars::{add_car, filter_cars, find_car, get_car_details, get_car_named_add, get_cars, remove_car, update_car};
