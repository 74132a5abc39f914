//! Terminal presentation: key bindings, rendering and the event loop.
//!
//! This layer only observes [`DisplaySnapshot`](crate::effects::DisplaySnapshot)s
//! and turns key presses into [`Command`](crate::core::Command)s; all
//! calculator behaviour lives in the core and the shell.

mod app;
mod keys;
mod render;
pub mod terminal;

pub use app::App;
pub use keys::{action_for, KeyAction, HELP};
pub use render::render;
