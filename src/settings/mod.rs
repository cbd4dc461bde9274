//! Settings files: document model, tier locations, and disk access
//!
//! Each scope tier is one JSON file. Reads fail soft (a missing or broken
//! file is indistinguishable from one with no rules); writes merge the
//! permission section into the existing document so unrelated configuration
//! is never clobbered.

pub mod document;
pub mod paths;
pub mod store;

pub use document::{RuleLists, SettingsDocument};
