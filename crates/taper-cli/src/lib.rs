//! taper-cli library root.
//!
//! Re-exports the command layer and renderer so integration tests can drive
//! the client without a terminal attached.

pub mod app;
pub mod render;
