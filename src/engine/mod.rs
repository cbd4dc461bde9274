//! The scope-reconciliation engine
//!
//! - `merge` - load-time collapse of per-scope rule lists
//! - `session` - in-memory state and accessors
//! - `mutate` - toggle/promote/demote/delete transitions
//! - `save` - partition back into per-file payloads and resynchronize

pub mod merge;
pub mod mutate;
pub mod save;
pub mod session;

pub use mutate::StepDirection;
pub use session::Session;
