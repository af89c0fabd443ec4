//! # itemsdat-reader
//!
//! A reader for Growtopia's `items.dat` item database.
//! Supports database versions 1 through 14, including the XOR name
//! encryption introduced in version 3, and renders decoded databases as
//! delimiter-joined plain-text reports.
pub mod itemsdat;

// Re-export the main types for convenience
pub use itemsdat::{
    error::{ItemsDatError, Result},
    models::{DatHeader, DatVersion, Item, MAX_SUPPORTED_VERSION},
    ItemsDat,
};
