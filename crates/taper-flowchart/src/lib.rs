//! taper-flowchart
//!
//! Decision-tree engine for withdrawal-management pathways. A flowchart is an
//! immutable table of question/outcome nodes validated at load time; a
//! [`nav::Navigation`] records the path taken through it; [`render::render`]
//! turns the current history into a view model with no hidden state. The
//! alcohol-withdrawal pathway ships as data in [`alcohol`].

pub mod alcohol;
pub mod error;
pub mod graph;
pub mod nav;
pub mod render;
