//! tintview library crate.
//!
//! Renders raster images as rows of background-colored terminal cells. The
//! binary wires these modules to the command line; integration tests use
//! them directly.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod raster;
pub mod terminal;
pub mod viewer;

pub use error::ViewError;
pub use viewer::{prepare, run, ViewOptions};
