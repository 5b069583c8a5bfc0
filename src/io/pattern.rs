//! Pattern document export and import
//!
//! The wire format is JSON. Export always produces the wrapped shape
//! `{ cubes: [...], colors: {a, b} }`; import additionally accepts a bare
//! array of cube records and a flat `"x,y,z" -> truthy` map. Coordinates
//! pass through untransformed in both directions.

use serde::Serialize;
use serde_json::Value;

use crate::core::types::IVec3;
use crate::cube::config::Palette;
use crate::cube::face::{ColorSlot, Face, SideColors};
use crate::cube::store::{CubeMap, CubeStore};
use crate::pattern::Pattern;

/// Pattern name recorded after any bulk load
pub const CUSTOM_PATTERN: &str = "custom";

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// One face assignment on the wire
#[derive(Clone, Debug, Serialize)]
pub struct SideRec {
    pub face: &'static str,
    pub color: &'static str,
}

/// One voxel on the wire. Only accent faces appear in `sides`.
#[derive(Clone, Debug, Serialize)]
pub struct CubeRec {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub sides: Vec<SideRec>,
}

/// Exported pattern document
#[derive(Clone, Debug, Serialize)]
pub struct PatternDoc {
    pub cubes: Vec<CubeRec>,
    pub colors: Palette,
}

/// Export the current grid as a pattern document.
///
/// Cubes are sorted by coordinate and sides by face order, so the same
/// grid always exports to the same document.
pub fn export_pattern(store: &CubeStore) -> PatternDoc {
    let mut cubes: Vec<CubeRec> = store
        .cubes()
        .iter()
        .map(|(&coord, sides)| CubeRec {
            x: coord.x,
            y: coord.y,
            z: coord.z,
            sides: sides
                .accent_faces()
                .map(|face| SideRec { face: face.name(), color: ColorSlot::B.name() })
                .collect(),
        })
        .collect();
    cubes.sort_by_key(|c| (c.x, c.y, c.z));

    PatternDoc {
        cubes,
        colors: store.visual().colors.clone(),
    }
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Structurally parsed pattern, not yet applied to any store
#[derive(Debug, Default)]
pub struct ParsedPattern {
    pub cubes: CubeMap,
    pub color_a: Option<String>,
    pub color_b: Option<String>,
}

/// Parse a pattern document of any accepted shape.
///
/// Attempts, in priority order: wrapped object with a `cubes` array, bare
/// array of cube records, flat coordinate-key map. Individual entries
/// that are malformed are skipped with a warning; a document whose
/// overall shape matches none of the above is an error. Parsing never
/// touches store state.
pub fn parse_pattern_value(value: &Value) -> crate::core::types::Result<ParsedPattern> {
    use crate::core::Error;

    if let Some(obj) = value.as_object() {
        if let Some(cubes_value) = obj.get("cubes") {
            let Some(entries) = cubes_value.as_array() else {
                return Err(Error::Pattern("`cubes` is not an array".to_string()));
            };
            let mut parsed = ParsedPattern {
                cubes: parse_cube_entries(entries),
                ..ParsedPattern::default()
            };
            if let Some(colors) = obj.get("colors") {
                parsed.color_a = colors.get("a").and_then(Value::as_str).map(String::from);
                parsed.color_b = colors.get("b").and_then(Value::as_str).map(String::from);
            }
            return Ok(parsed);
        }
        return parse_flat_map(obj);
    }

    if let Some(entries) = value.as_array() {
        return Ok(ParsedPattern {
            cubes: parse_cube_entries(entries),
            ..ParsedPattern::default()
        });
    }

    Err(Error::Pattern("unrecognized pattern document shape".to_string()))
}

/// Parse an array of `{x, y, z, sides?}` records, skipping malformed
/// entries
fn parse_cube_entries(entries: &[Value]) -> CubeMap {
    let mut cubes = CubeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let (Some(x), Some(y), Some(z)) = (
            entry.get("x").and_then(Value::as_i64),
            entry.get("y").and_then(Value::as_i64),
            entry.get("z").and_then(Value::as_i64),
        ) else {
            log::warn!("skipping cube entry {index}: missing numeric x/y/z");
            continue;
        };

        let sides = entry.get("sides").map_or(SideColors::EMPTY, parse_sides);
        cubes.insert(IVec3::new(x as i32, y as i32, z as i32), sides);
    }

    cubes
}

/// Parse `sides` in either accepted shape: an array of `{face, color}`
/// pairs or a `{face: color}` map. Unknown faces and non-accent colors
/// are dropped, which normalizes the representation.
fn parse_sides(value: &Value) -> SideColors {
    let mut sides = SideColors::EMPTY;

    let mut add = |face: Option<&str>, color: Option<&str>| {
        let (Some(face), Some(color)) = (face, color) else { return };
        let Some(face) = Face::from_name(face) else {
            log::warn!("ignoring unknown face name '{face}'");
            return;
        };
        if ColorSlot::from_name(color) == Some(ColorSlot::B) {
            sides.set(face, ColorSlot::B);
        }
    };

    match value {
        Value::Array(pairs) => {
            for pair in pairs {
                add(
                    pair.get("face").and_then(Value::as_str),
                    pair.get("color").and_then(Value::as_str),
                );
            }
        }
        Value::Object(map) => {
            for (face, color) in map {
                add(Some(face.as_str()), color.as_str());
            }
        }
        _ => {}
    }

    sides
}

/// Parse the flat `"x,y,z" -> truthy` map form.
///
/// Counts as a structural match only when at least one key parses as a
/// coordinate; otherwise the object is just not a pattern document.
fn parse_flat_map(obj: &serde_json::Map<String, Value>) -> crate::core::types::Result<ParsedPattern> {
    use crate::core::Error;

    let mut cubes = CubeMap::new();
    let mut matched_key = false;

    for (key, value) in obj {
        let Some(coord) = parse_coordinate_key(key) else {
            log::warn!("skipping flat-map entry '{key}': not a coordinate key");
            continue;
        };
        matched_key = true;
        if is_truthy(value) {
            cubes.insert(coord, SideColors::EMPTY);
        }
    }

    if !matched_key {
        return Err(Error::Pattern("object has no coordinate keys".to_string()));
    }

    Ok(ParsedPattern { cubes, ..ParsedPattern::default() })
}

fn parse_coordinate_key(key: &str) -> Option<IVec3> {
    let mut parts = key.split(',').map(|p| p.trim().parse::<i32>());
    let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    Some(IVec3::new(x, y, z))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Import a pattern document into the store.
///
/// On success the grid is replaced wholesale, the pattern name becomes
/// "custom", document colors (when present) merge into the palette, and
/// the call returns `true`. A document that parses to an empty grid falls
/// back to the default hollow pattern and returns `false`; unrecognized
/// input returns `false` without touching any state.
pub fn import_pattern(store: &mut CubeStore, value: &Value) -> bool {
    let parsed = match parse_pattern_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("failed to load pattern: {e}");
            return false;
        }
    };

    if parsed.cubes.is_empty() {
        log::warn!("pattern contains no cubes; falling back to the default pattern");
        store.apply_pattern(Pattern::Hollow);
        return false;
    }

    log::info!("loaded pattern with {} cubes", parsed.cubes.len());
    store.replace_cubes(parsed.cubes, CUSTOM_PATTERN);
    if parsed.color_a.is_some() || parsed.color_b.is_some() {
        store.set_colors(parsed.color_a.as_deref(), parsed.color_b.as_deref());
    }
    true
}
