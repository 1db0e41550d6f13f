//! Integration tests for valid-rules.

mod config;
mod dynamic_input;
mod rules;
