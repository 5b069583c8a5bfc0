//! Built-in composite logo pattern
//!
//! The branded default pattern is a fixed data table rather than a
//! predicate: a list of coordinates with per-voxel accent faces, embedded
//! at build time. Callers fall back to the hollow pattern when the table
//! fails to parse.

use serde::Deserialize;

use crate::core::types::{IVec3, Result};
use crate::core::Error;
use crate::cube::config::Palette;
use crate::cube::face::{ColorSlot, Face, SideColors};

static LOGO_JSON: &str = include_str!("../../data/logo.json");

#[derive(Debug, Deserialize)]
struct LogoDoc {
    cubes: Vec<LogoCubeRec>,
    colors: Palette,
}

#[derive(Debug, Deserialize)]
struct LogoCubeRec {
    x: i32,
    y: i32,
    z: i32,
    #[serde(default)]
    sides: Vec<LogoSideRec>,
}

#[derive(Debug, Deserialize)]
struct LogoSideRec {
    face: String,
    color: String,
}

/// Parsed logo table: voxel coordinates with accent faces, plus the
/// palette the logo was designed for
#[derive(Debug, Clone)]
pub struct LogoData {
    pub cubes: Vec<(IVec3, SideColors)>,
    pub colors: Palette,
}

/// Parse the embedded logo table.
///
/// An empty table is reported as an error so callers always end up with a
/// non-empty grid.
pub fn load() -> Result<LogoData> {
    let doc: LogoDoc =
        serde_json::from_str(LOGO_JSON).map_err(|e| Error::Asset(format!("logo table: {e}")))?;

    if doc.cubes.is_empty() {
        return Err(Error::Asset("logo table is empty".to_string()));
    }

    let cubes = doc
        .cubes
        .into_iter()
        .map(|rec| {
            let mut sides = SideColors::EMPTY;
            for side in &rec.sides {
                if let (Some(face), Some(ColorSlot::B)) =
                    (Face::from_name(&side.face), ColorSlot::from_name(&side.color))
                {
                    sides.set(face, ColorSlot::B);
                }
            }
            (IVec3::new(rec.x, rec.y, rec.z), sides)
        })
        .collect();

    Ok(LogoData { cubes, colors: doc.colors })
}
