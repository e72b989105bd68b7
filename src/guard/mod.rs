// src/guard/mod.rs

pub mod middleware;
pub mod rules;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use middleware::session_guard;
pub use rules::{classify, evaluate, GuardOutcome, RouteClass, SESSION_COOKIE};
