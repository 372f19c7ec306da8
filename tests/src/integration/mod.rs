//! # Integration Scenarios
//!
//! Cross-crate tests driving the hub through the compiled-in registry host.

pub mod dispatch;
pub mod lifecycle;
