//! Custom error types for the itemsdat-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ItemsDatError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The items.dat version is unsupported (15 or above).
    #[error("Unsupported items.dat version: {0}. Only versions up to 14 are supported.")]
    UnsupportedVersion(u16),

    /// A read would run past the end of the buffer, indicating a truncated
    /// or corrupted file.
    #[error("Read out of bounds at offset {offset}: needed {needed} bytes, {available} available")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A decoded item id does not match its position in the database.
    ///
    /// Item ids are stored sequentially; any gap means the parser lost
    /// byte alignment somewhere before this record.
    #[error("Item id out of sequence at index {index}: found id {found}")]
    SequenceMismatch { index: u32, found: u32 },

    /// A record failed to decode, making the whole database unusable.
    #[error("Malformed item database at item {index}: {source}")]
    MalformedDatabase {
        index: u32,
        #[source]
        source: Box<ItemsDatError>,
    },
}

/// A convenience `Result` type alias using the crate's `ItemsDatError` type.
pub type Result<T> = std::result::Result<T, ItemsDatError>;
