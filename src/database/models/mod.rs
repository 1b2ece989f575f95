pub mod config;
pub mod parameter;

// Re-export all structures for convenience
pub use config::*;
pub use parameter::*;
