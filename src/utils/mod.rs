//! Utility functions shared by the library and the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - Application config stored in the per-user app directory
//! - [`logging`] - `tracing` subscriber setup

pub mod app_data;
pub mod logging;

pub use app_data::*;
pub use logging::*;
