// src/tasks/tests/mod.rs

mod models_tests;
mod support;
mod validators_tests;
