mod user;
#[allow(clippy::module_inception)]
mod users;

pub use user::{default_users, Permission, User};
pub use users::get_user_list;
