//! nightowl library
//!
//! This module exports the CLI configuration and report rendering for use
//! in integration tests.

pub mod config;
pub mod render;
