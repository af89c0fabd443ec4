//! items.dat header parsing

use log::info;

use super::cursor::ByteCursor;
use super::error::Result;
use super::models::{DatHeader, DatVersion};

/// Parse the items.dat file header.
///
/// Header structure (little-endian, no padding):
/// - 2 bytes: Database version
/// - 4 bytes: Item count
///
/// The version gate fires here, before the item count is read: a version
/// above 14 means record layouts this crate does not know, so no further
/// bytes are consumed.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<DatHeader> {
    let version = DatVersion::try_from(cursor.read_u16()?)?;
    let item_count = cursor.read_u32()?;

    info!("items.dat header: version={}, item_count={}", version, item_count);

    Ok(DatHeader { version, item_count })
}
