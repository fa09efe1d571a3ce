//! Block data model, liquid classification, and liquid configuration.
#![forbid(unsafe_code)]

pub mod config;
pub mod liquid;
pub mod types;

// Re-exports for convenience
pub use config::{LiquidCatalog, LiquidsConfig};
pub use liquid::{LiquidClassifier, MalformedLevel};
pub use types::{Block, BlockContext, BlockState, Direction};
