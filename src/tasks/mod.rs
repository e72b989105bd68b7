// src/tasks/mod.rs

pub mod client;
pub mod controller;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
pub use routes::tasks_routes;
