//! Interactive console front end
//!
//! Thin presentation layer over the engine: colored line output, a
//! line-command parser, and the event loop that drives the session and
//! navigation state. Raw terminal protocols (cursor addressing, mouse
//! decoding) are deliberately not handled here.

pub mod app;
pub mod console;
pub mod event;

pub use app::App;
pub use console::Console;
pub use event::Event;
