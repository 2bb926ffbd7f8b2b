pub mod build;
pub mod reader;
pub mod stats;
pub mod types;

pub use build::RegistryError;
pub use reader::IndexableRegistry;
pub use types::*;
