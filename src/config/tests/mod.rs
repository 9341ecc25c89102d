//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence and CLI/environment loading
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token, tutor id, filter, and gateway settings

mod helpers;
mod precedence;
