//! SortAnim application library.
//!
//! Exposes the configuration and dispatch used by the `sortanim` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
