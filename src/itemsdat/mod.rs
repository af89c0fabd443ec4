//! Core items.dat reader module

pub mod models;
pub mod error;
pub mod report;
pub mod crypto;
mod cursor;
mod header;
mod record;

use std::fs;
use std::path::Path;

use log::{debug, info};

use cursor::ByteCursor;
pub use error::{ItemsDatError, Result};
use models::{DatVersion, Item};

/// A fully decoded items.dat database.
///
/// Decoding is all-or-nothing: either every declared item parsed cleanly,
/// or decoding failed and nothing is returned. `items[i].id == i` holds
/// for every item.
#[derive(Debug, Clone)]
pub struct ItemsDat {
    pub version: DatVersion,
    items: Vec<Item>,
}

impl ItemsDat {
    /// Decode an items.dat database from an in-memory buffer.
    ///
    /// Records have no length markers or index table, so they are decoded
    /// strictly in order; each record's position is only known once all
    /// records before it have been consumed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The header declares a version above 14 (`UnsupportedVersion`)
    /// - Any read runs past the end of the buffer (`MalformedDatabase`
    ///   wrapping `OutOfBounds`)
    /// - Any item's stored id differs from its position (`MalformedDatabase`
    ///   wrapping `SequenceMismatch`)
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(buf);
        let dat_header = header::parse(&mut cursor)?;

        let mut items = Vec::with_capacity(dat_header.item_count as usize);
        for i in 0..dat_header.item_count {
            let item = record::parse(&mut cursor, dat_header.version, i).map_err(|e| {
                ItemsDatError::MalformedDatabase {
                    index: i,
                    source: Box::new(e),
                }
            })?;
            items.push(item);
        }

        debug!(
            "Decoded {} items, {} of {} bytes consumed",
            items.len(),
            cursor.position(),
            buf.len()
        );

        Ok(Self {
            version: dat_header.version,
            items,
        })
    }

    /// Read and decode an items.dat file from the given path.
    ///
    /// The whole file is buffered before parsing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening items.dat file: {}", path.display());
        let buf = fs::read(path)?;
        Self::decode(&buf)
    }

    /// The decoded items, ordered by id.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the database.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    ///
    /// Ids are sequential, so this is a plain index.
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.get(id as usize)
    }
}
