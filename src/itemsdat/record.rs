//! Item record parsing (one fixed layout per database version)

use encoding_rs::WINDOWS_1252;
use log::trace;

use super::crypto;
use super::cursor::ByteCursor;
use super::error::{ItemsDatError, Result};
use super::models::{DatVersion, Item};

/// Parse one item record at the cursor's current position.
///
/// Record structure (little-endian, fields in this exact order):
/// - u32 id, u16 properties, u8 type, u8 material
/// - name (length-prefixed; XOR-decrypted on v3+)
/// - file_name (length-prefixed), u32 file_hash, u8 visual_type,
///   u32 cook_time, u8 tex_x, u8 tex_y, u8 storage_type, u8 layer,
///   u8 collision_type, u8 hardness, u32 regen_time, u8 clothing_type,
///   u16 rarity, u8 max_hold, alt_file_path (length-prefixed),
///   u32 alt_file_hash, u32 anim_ms
/// - v4+: pet_name, pet_prefix, pet_suffix; v5+: pet_ability
/// - u8 seed_base, u8 seed_over, u8 tree_base, u8 tree_over,
///   u32 bg_col, u32 fg_col, u16 seed1, u16 seed2, u32 bloom_time
/// - v7+: u32 anim_type, anim_string
/// - v8+: anim_tex, anim_string2, u32 dlayer1, u32 dlayer2
/// - v9+: u32 properties2, then 60 reserved bytes
/// - v10+: u32 tile_range, u32 pile_range
/// - v11+: custom_punch
/// - v12/v13/v14: 13/4/4 reserved bytes
///
/// There are no per-field tags; the format relies entirely on positional
/// agreement between reader and writer. A width or ordering mistake here
/// desynchronizes every subsequent field, so the stored id is checked
/// against `ordinal` as the only in-band alignment probe.
pub fn parse(cursor: &mut ByteCursor<'_>, version: DatVersion, ordinal: u32) -> Result<Item> {
    let id = cursor.read_u32()?;
    if id != ordinal {
        return Err(ItemsDatError::SequenceMismatch {
            index: ordinal,
            found: id,
        });
    }

    let mut item = Item {
        id,
        ..Item::default()
    };

    item.properties = cursor.read_u16()?;
    item.item_type = cursor.read_u8()?;
    item.material = cursor.read_u8()?;

    item.name = if version.encrypted_names() {
        read_encrypted_text(cursor, id)?
    } else {
        read_text(cursor)?
    };

    item.file_name = read_text(cursor)?;
    item.file_hash = cursor.read_u32()?;
    item.visual_type = cursor.read_u8()?;
    item.cook_time = cursor.read_u32()?;
    item.tex_x = cursor.read_u8()?;
    item.tex_y = cursor.read_u8()?;
    item.storage_type = cursor.read_u8()?;
    item.layer = cursor.read_u8()?;
    item.collision_type = cursor.read_u8()?;
    item.hardness = cursor.read_u8()?;
    item.regen_time = cursor.read_u32()?;
    item.clothing_type = cursor.read_u8()?;
    item.rarity = cursor.read_u16()?;
    item.max_hold = cursor.read_u8()?;
    item.alt_file_path = read_text(cursor)?;
    item.alt_file_hash = cursor.read_u32()?;
    item.anim_ms = cursor.read_u32()?;

    if version.has_pet_fields() {
        item.pet_name = read_text(cursor)?;
        item.pet_prefix = read_text(cursor)?;
        item.pet_suffix = read_text(cursor)?;
        if version.has_pet_ability() {
            item.pet_ability = read_text(cursor)?;
        }
    }

    item.seed_base = cursor.read_u8()?;
    item.seed_over = cursor.read_u8()?;
    item.tree_base = cursor.read_u8()?;
    item.tree_over = cursor.read_u8()?;
    item.bg_col = cursor.read_u32()?;
    item.fg_col = cursor.read_u32()?;
    item.seed1 = cursor.read_u16()?;
    item.seed2 = cursor.read_u16()?;
    item.bloom_time = cursor.read_u32()?;

    if version.has_anim_type() {
        item.anim_type = cursor.read_u32()?;
        item.anim_string = read_text(cursor)?;
    }
    if version.has_extended_anim() {
        item.anim_tex = read_text(cursor)?;
        item.anim_string2 = read_text(cursor)?;
        item.dlayer1 = cursor.read_u32()?;
        item.dlayer2 = cursor.read_u32()?;
    }
    if version.has_properties2() {
        item.properties2 = cursor.read_u32()?;
        // 60 bytes with no known meaning follow properties2.
        cursor.skip(60)?;
    }
    if version.has_ranges() {
        item.tile_range = cursor.read_u32()?;
        item.pile_range = cursor.read_u32()?;
    }
    if version.has_custom_punch() {
        item.custom_punch = read_text(cursor)?;
    }
    cursor.skip(version.trailing_flag_bytes())?;

    trace!(
        "Parsed item {} ({:?}) ending at offset {}",
        item.id,
        item.name,
        cursor.position()
    );

    Ok(item)
}

/// Read a length-prefixed plaintext field.
fn read_text(cursor: &mut ByteCursor<'_>) -> Result<String> {
    Ok(decode_text(cursor.read_length_prefixed()?))
}

/// Read a length-prefixed name field and decrypt it keyed by the item id.
fn read_encrypted_text(cursor: &mut ByteCursor<'_>, item_id: u32) -> Result<String> {
    let mut bytes = cursor.read_length_prefixed()?.to_vec();
    crypto::decrypt_name(&mut bytes, item_id);
    Ok(decode_text(&bytes))
}

/// Decode wire bytes to a string.
///
/// Item text is single-byte; Windows-1252 decoding is total, so this never
/// fails on arbitrary bytes.
fn decode_text(bytes: &[u8]) -> String {
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}
