//! # Chain-Events Test Suite
//!
//! Unified test crate containing cross-crate integration scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs      # Recording listener and shared fixtures
//! └── integration/    # Lifecycle and dispatch scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hub-tests
//!
//! # By category
//! cargo test -p hub-tests integration::lifecycle
//! cargo test -p hub-tests integration::dispatch
//! ```

#![allow(dead_code)]

pub mod integration;
