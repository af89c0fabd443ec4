//! Data structures representing items.dat format components

use std::fmt;

use super::error::{ItemsDatError, Result};

/// Highest items.dat version this crate knows the layout of.
pub const MAX_SUPPORTED_VERSION: u16 = 14;

/// Database schema version from the items.dat header.
///
/// The version selects which of the 14 known record layouts every item in
/// the file follows. Construction via `TryFrom<u16>` rejects anything
/// above [`MAX_SUPPORTED_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DatVersion(u16);

impl DatVersion {
    /// The raw version number as stored in the header.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Item names are XOR-encrypted from version 3 onward.
    pub fn encrypted_names(&self) -> bool {
        self.0 >= 3
    }

    /// Version 4 added pet name/prefix/suffix strings.
    pub fn has_pet_fields(&self) -> bool {
        self.0 >= 4
    }

    /// Version 5 added the pet ability string.
    pub fn has_pet_ability(&self) -> bool {
        self.0 >= 5
    }

    /// Version 7 added the animation type and animation string.
    pub fn has_anim_type(&self) -> bool {
        self.0 >= 7
    }

    /// Version 8 added more animation strings and two layer fields.
    pub fn has_extended_anim(&self) -> bool {
        self.0 >= 8
    }

    /// Version 9 added a second properties word (plus reserved bytes).
    pub fn has_properties2(&self) -> bool {
        self.0 >= 9
    }

    /// Version 10 added tile/pile ranges (extractors and the like).
    pub fn has_ranges(&self) -> bool {
        self.0 >= 10
    }

    /// Version 11 added the custom punch string.
    pub fn has_custom_punch(&self) -> bool {
        self.0 >= 11
    }

    /// Number of reserved bytes at the end of each record.
    ///
    /// Versions 12, 13 and 14 each appended a flag block (13, 4 and 4
    /// bytes) with no known meaning.
    pub fn trailing_flag_bytes(&self) -> usize {
        let mut len = 0;
        if self.0 >= 12 {
            len += 13;
        }
        if self.0 >= 13 {
            len += 4;
        }
        if self.0 >= 14 {
            len += 4;
        }
        len
    }
}

impl TryFrom<u16> for DatVersion {
    type Error = ItemsDatError;
    fn try_from(v: u16) -> Result<Self> {
        if v <= MAX_SUPPORTED_VERSION {
            Ok(Self(v))
        } else {
            Err(ItemsDatError::UnsupportedVersion(v))
        }
    }
}

impl fmt::Display for DatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parsed items.dat file header.
#[derive(Debug, Clone, Copy)]
pub struct DatHeader {
    pub version: DatVersion,
    pub item_count: u32,
}

/// A single item record.
///
/// All fields exist at every version; fields the file's schema version
/// does not carry are left at their zero/empty defaults. The format does
/// not distinguish "absent" from "genuinely zero".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: u32,
    pub properties: u16,
    pub item_type: u8,
    pub material: u8,
    /// Plaintext in versions 1-2, XOR-encrypted on the wire from version 3.
    pub name: String,
    pub file_name: String,
    pub file_hash: u32,
    pub visual_type: u8,
    pub cook_time: u32,
    pub tex_x: u8,
    pub tex_y: u8,
    pub storage_type: u8,
    pub layer: u8,
    pub collision_type: u8,
    pub hardness: u8,
    pub regen_time: u32,
    pub clothing_type: u8,
    pub rarity: u16,
    pub max_hold: u8,
    pub alt_file_path: String,
    pub alt_file_hash: u32,
    pub anim_ms: u32,

    // Version 4+
    pub pet_name: String,
    pub pet_prefix: String,
    pub pet_suffix: String,
    // Version 5+
    pub pet_ability: String,

    pub seed_base: u8,
    pub seed_over: u8,
    pub tree_base: u8,
    pub tree_over: u8,
    pub bg_col: u32,
    pub fg_col: u32,
    /// Always zero in known files; unused by the game.
    pub seed1: u16,
    /// Always zero in known files; unused by the game.
    pub seed2: u16,
    pub bloom_time: u32,

    // Version 7+
    pub anim_type: u32,
    pub anim_string: String,
    // Version 8+
    pub anim_tex: String,
    pub anim_string2: String,
    pub dlayer1: u32,
    pub dlayer2: u32,
    // Version 9+ (the first properties word ran out of bits)
    pub properties2: u32,
    // Version 10+
    pub tile_range: u32,
    pub pile_range: u32,
    // Version 11+
    pub custom_punch: String,
}
