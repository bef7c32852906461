//! # recipeshare-storage
//!
//! Durable key-value storage for the RecipeShare client session. Supports
//! two backends:
//!
//! - **memory**: process-local map using [dashmap](https://crates.io/crates/dashmap)
//! - **file**: a single JSON object file that survives restarts
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
pub mod manager;
#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "file")]
pub use file::FileStore;
pub use manager::StoreManager;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
