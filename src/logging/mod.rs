// file: src/logging/mod.rs
// version: 1.0.0
// guid: ff3db642-e476-4675-9cba-11741f1dbcd2

//! Logging system for the normatives import agent

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_operation_span};
