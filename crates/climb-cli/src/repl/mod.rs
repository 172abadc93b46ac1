//! Interactive command loop.
//!
//! Reads one verb per line, prompts for each field it needs, and mutates the
//! borrowed [`climb_core::ClimbStore`]. Invalid field input is reported and
//! asked again; a missing climb or a duplicate key aborts the command with
//! the store untouched.

mod help;
mod prompt;
mod session;
mod verb;

pub use session::Session;
