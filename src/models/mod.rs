pub mod user;

pub use user::{CurrentUser, Role};
