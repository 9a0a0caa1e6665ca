pub mod admin;
pub mod auth;
pub mod layout;
pub mod pages;
pub mod profile;
pub mod routes;

pub use routes::AppRoutes;
