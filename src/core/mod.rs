//! Core types shared across the crate
//!
//! - `SyncError` / `SyncResult` - Error types

pub mod error;

pub use error::{SyncError, SyncResult};
