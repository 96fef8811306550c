// users_api/src/web/mod.rs

pub mod adapters;
pub mod controllers;
pub mod error_mapper;
pub mod http;
pub mod middleware;
pub mod routes;

pub use routes::configure_app_routes;
