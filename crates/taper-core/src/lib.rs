//! taper-core
//!
//! Shared vocabulary of the Taper system: page identifiers, the collaborator
//! seams the engines call into (page router, tab router, clipboard), and the
//! text utilities used by generated clinical summaries. Pure domain — the
//! only side effect anywhere in this crate is logging.

pub mod clipboard;
pub mod page;
pub mod route;
pub mod text;
