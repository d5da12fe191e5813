//! Helpers shared by the workspace's proc-macro crates.
//!
//! [`Manifest`] tells generated code where `vt_reflect` lives from the
//! point of view of the crate being compiled.

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
