// src/auth/mod.rs

pub mod client;
pub mod handlers;
pub mod models;
pub mod routes;


// Re-export commonly used items
pub use client::AuthClient;
pub use routes::auth_routes;
