//! Plain-text report generation for a decoded database

use std::io::Write;

use log::debug;

use super::error::Result;
use super::models::Item;
use super::ItemsDat;

/// Formatting options for [`write_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Separator placed between fields. Item rows end with a newline
    /// instead of a trailing separator.
    pub delimiter: char,
    /// Emit only id and name per item.
    pub minified: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            delimiter: '|',
            minified: false,
        }
    }
}

/// Write one delimiter-joined line per item, in id order.
///
/// Full mode emits every field in wire order, but only the fields the
/// database version actually carries (a v2 report has no pet columns).
/// Reserved padding never appears in the report.
pub fn write_report<W: Write>(out: &mut W, dat: &ItemsDat, options: &ReportOptions) -> Result<()> {
    debug!(
        "Writing report for {} items (minified={})",
        dat.len(),
        options.minified
    );

    let mut fields: Vec<String> = Vec::new();
    for item in dat.items() {
        fields.clear();
        if options.minified {
            fields.push(item.id.to_string());
            fields.push(item.name.clone());
        } else {
            collect_fields(&mut fields, item, dat);
        }
        let line = fields.join(&options.delimiter.to_string());
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn collect_fields(fields: &mut Vec<String>, item: &Item, dat: &ItemsDat) {
    let version = dat.version;

    fields.push(item.id.to_string());
    fields.push(item.properties.to_string());
    fields.push(item.item_type.to_string());
    fields.push(item.material.to_string());
    fields.push(item.name.clone());
    fields.push(item.file_name.clone());
    fields.push(item.file_hash.to_string());
    fields.push(item.visual_type.to_string());
    fields.push(item.cook_time.to_string());
    fields.push(item.tex_x.to_string());
    fields.push(item.tex_y.to_string());
    fields.push(item.storage_type.to_string());
    fields.push(item.layer.to_string());
    fields.push(item.collision_type.to_string());
    fields.push(item.hardness.to_string());
    fields.push(item.regen_time.to_string());
    fields.push(item.clothing_type.to_string());
    fields.push(item.rarity.to_string());
    fields.push(item.max_hold.to_string());
    fields.push(item.alt_file_path.clone());
    fields.push(item.alt_file_hash.to_string());
    fields.push(item.anim_ms.to_string());

    if version.has_pet_fields() {
        fields.push(item.pet_name.clone());
        fields.push(item.pet_prefix.clone());
        fields.push(item.pet_suffix.clone());
        if version.has_pet_ability() {
            fields.push(item.pet_ability.clone());
        }
    }

    fields.push(item.seed_base.to_string());
    fields.push(item.seed_over.to_string());
    fields.push(item.tree_base.to_string());
    fields.push(item.tree_over.to_string());
    fields.push(item.bg_col.to_string());
    fields.push(item.fg_col.to_string());
    fields.push(item.seed1.to_string());
    fields.push(item.seed2.to_string());
    fields.push(item.bloom_time.to_string());

    if version.has_anim_type() {
        fields.push(item.anim_type.to_string());
        fields.push(item.anim_string.clone());
    }
    if version.has_extended_anim() {
        fields.push(item.anim_tex.clone());
        fields.push(item.anim_string2.clone());
        fields.push(item.dlayer1.to_string());
        fields.push(item.dlayer2.to_string());
    }
    if version.has_properties2() {
        fields.push(item.properties2.to_string());
    }
    if version.has_ranges() {
        fields.push(item.tile_range.to_string());
        fields.push(item.pile_range.to_string());
    }
    if version.has_custom_punch() {
        fields.push(item.custom_punch.clone());
    }
}
