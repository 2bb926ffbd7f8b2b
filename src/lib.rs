//! # SXI - Settings Indexable Catalog
//!
//! SXI supplies the catalog of search-indexable settings screens to a
//! separate indexing subsystem. It builds no index and answers no queries;
//! it only says which screens exist, how they rank, where their structured
//! data lives and which icon they carry.
//!
//! ## Architecture
//!
//! - [`registry`] - The immutable identifier -> record catalog
//! - [`ranking`] - Rank providers (the built-in rank table, or any closure)
//! - [`manifest`] - The compiled-in list of indexable screens
//! - [`resources`] - Symbolic data and icon resource references
//! - [`output`] - Listing and JSON rendering
//! - [`utils`] - Config and logging setup
//!
//! ## Quick Start
//!
//! ```
//! use sxi::manifest::builtin_manifest;
//! use sxi::ranking::RankTable;
//! use sxi::registry::{IndexableRegistry, NO_DATA_RES_ID};
//!
//! let registry = IndexableRegistry::initialize(&builtin_manifest(), &RankTable::builtin())
//!     .expect("built-in manifest is well formed");
//!
//! let wifi = registry.get("com.android.settings.wifi.WifiSettings").unwrap();
//! assert_eq!(wifi.data_ref, NO_DATA_RES_ID);
//! assert!(registry.get("nonexistent.Class").is_none());
//! ```
//!
//! The registry is built once and never mutated, so it can be shared across
//! threads behind a plain reference or an `Arc`.

pub mod manifest;
pub mod output;
pub mod ranking;
pub mod registry;
pub mod resources;
pub mod utils;

pub use registry::{IndexableRecord, IndexableRegistry, NO_DATA_RES_ID, RegistryError};
