//! Full-configuration export and import
//!
//! A full configuration bundles the pattern with the visual and animation
//! settings plus export metadata, so a saved file restores the whole
//! designer state.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::cube::config::{AnimationConfig, AnimationType, Palette, VisualConfig};
use crate::cube::store::CubeStore;
use crate::io::pattern::{export_pattern, parse_pattern_value, PatternDoc, CUSTOM_PATTERN};
use crate::pattern::Pattern;

/// Format version stamped into exported configurations
pub const CONFIG_VERSION: &str = "1.1";

/// Export metadata
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDoc {
    pub pattern_name: String,
    /// ISO-8601 export timestamp
    pub export_date: String,
    pub version: String,
}

/// Exported full configuration document
#[derive(Clone, Debug, Serialize)]
pub struct ConfigDoc {
    pub visual: VisualConfig,
    pub animation: AnimationConfig,
    pub meta: MetaDoc,
    pub pattern: PatternDoc,
}

/// Export the complete store state
pub fn export_full_config(store: &CubeStore) -> ConfigDoc {
    ConfigDoc {
        visual: store.visual().clone(),
        animation: store.animation().clone(),
        meta: MetaDoc {
            pattern_name: store.pattern_name().to_string(),
            export_date: Utc::now().to_rfc3339(),
            version: CONFIG_VERSION.to_string(),
        },
        pattern: export_pattern(store),
    }
}

/// Import a full configuration document.
///
/// `pattern`, `visual`, and `animation` must all be present and the
/// pattern must parse before any state is touched; a failure here returns
/// `false` with the store unchanged. Missing sub-fields fall back to the
/// documented defaults. The pattern section accepts every shape
/// [`parse_pattern_value`] accepts, including the legacy bare array of
/// coordinates.
pub fn import_full_config(store: &mut CubeStore, value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        log::error!("configuration document is not an object");
        return false;
    };

    let (Some(pattern_value), Some(visual_value), Some(animation_value)) =
        (obj.get("pattern"), obj.get("visual"), obj.get("animation"))
    else {
        log::error!("configuration is missing pattern, visual, or animation");
        return false;
    };

    // Validate the pattern shape before applying anything
    let parsed = match parse_pattern_value(pattern_value) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("unrecognized pattern in configuration: {e}");
            return false;
        }
    };

    store.set_visual(visual_from_value(visual_value));
    store.set_animation(animation_from_value(animation_value));

    if parsed.cubes.is_empty() {
        log::warn!("configuration pattern contains no cubes; falling back to the default pattern");
        store.apply_pattern(Pattern::Hollow);
        return false;
    }

    let pattern_name = obj
        .get("meta")
        .and_then(|meta| meta.get("patternName"))
        .and_then(Value::as_str)
        .unwrap_or(CUSTOM_PATTERN);

    store.replace_cubes(parsed.cubes, pattern_name);
    if parsed.color_a.is_some() || parsed.color_b.is_some() {
        store.set_colors(parsed.color_a.as_deref(), parsed.color_b.as_deref());
    }
    true
}

fn visual_from_value(value: &Value) -> VisualConfig {
    let defaults = VisualConfig::default();
    let colors = value.get("colors");

    VisualConfig {
        colors: Palette {
            a: colors
                .and_then(|c| c.get("a"))
                .and_then(Value::as_str)
                .unwrap_or(&defaults.colors.a)
                .to_string(),
            b: colors
                .and_then(|c| c.get("b"))
                .and_then(Value::as_str)
                .unwrap_or(&defaults.colors.b)
                .to_string(),
        },
        cube_size: f32_field(value, "cubeSize", defaults.cube_size),
        gap: f32_field(value, "gap", defaults.gap),
    }
}

fn animation_from_value(value: &Value) -> AnimationConfig {
    let defaults = AnimationConfig::default();

    AnimationConfig {
        animation_type: value
            .get("type")
            .and_then(Value::as_str)
            .and_then(AnimationType::from_name)
            .unwrap_or(defaults.animation_type),
        speed: f32_field(value, "speed", defaults.speed),
        interaction_factor: f32_field(value, "interactionFactor", defaults.interaction_factor),
        ripple_interaction_factor: f32_field(
            value,
            "rippleInteractionFactor",
            defaults.ripple_interaction_factor,
        ),
        delay: f32_field(value, "delay", defaults.delay),
    }
}

fn f32_field(value: &Value, field: &str, default: f32) -> f32 {
    value
        .get(field)
        .and_then(Value::as_f64)
        .map_or(default, |f| f as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::face::{ColorSlot, Face};
    use serde_json::json;

    fn designed_store() -> CubeStore {
        let mut store = CubeStore::default();
        store.apply_pattern(Pattern::Nested);
        store.toggle_cube(2, 2, 2);
        store.set_face_color(2, 2, 2, Face::Front, Some(ColorSlot::B));
        store.set_face_color(0, 0, 0, Face::Bottom, Some(ColorSlot::B));
        store.set_colors(Some("#abcdef"), Some("#123456"));
        store.set_cube_size(0.6);
        store.set_gap(0.3);
        store.set_animation_type(AnimationType::Twist);
        store.set_animation_speed(2.5);
        store.set_interaction_factor(0.7);
        store.set_ripple_interaction_factor(0.9);
        store.set_animation_delay(0.05);
        store
    }

    #[test]
    fn test_full_config_round_trip() {
        let store = designed_store();
        let doc = serde_json::to_value(export_full_config(&store)).unwrap();

        let mut restored = CubeStore::new(5);
        assert!(import_full_config(&mut restored, &doc));
        assert_eq!(restored.cubes(), store.cubes());
        assert_eq!(restored.visual(), store.visual());
        assert_eq!(restored.animation(), store.animation());
        assert_eq!(restored.pattern_name(), store.pattern_name());
    }

    #[test]
    fn test_export_metadata() {
        let store = CubeStore::default();
        let doc = export_full_config(&store);
        assert_eq!(doc.meta.version, CONFIG_VERSION);
        assert_eq!(doc.meta.pattern_name, "hollow");
        // RFC 3339 timestamps carry a date/time separator
        assert!(doc.meta.export_date.contains('T'));
    }

    #[test]
    fn test_missing_section_fails_fast() {
        let mut store = CubeStore::default();
        let cubes_before = store.cubes().clone();
        let visual_before = store.visual().clone();
        let revision_before = store.revision();

        let incomplete = json!({
            "visual": {"cubeSize": 0.5},
            "animation": {"type": "wave"}
        });
        assert!(!import_full_config(&mut store, &incomplete));
        assert_eq!(store.cubes(), &cubes_before);
        assert_eq!(store.visual(), &visual_before);
        assert_eq!(store.revision(), revision_before);
    }

    #[test]
    fn test_bad_pattern_leaves_visual_untouched() {
        let mut store = CubeStore::default();
        let visual_before = store.visual().clone();

        let doc = json!({
            "visual": {"cubeSize": 0.5},
            "animation": {"type": "breathe"},
            "pattern": {"cubes": "oops"}
        });
        assert!(!import_full_config(&mut store, &doc));
        // Pattern validation happens before visual/animation apply
        assert_eq!(store.visual(), &visual_before);
    }

    #[test]
    fn test_missing_subfields_use_defaults() {
        let mut store = CubeStore::default();
        let doc = json!({
            "visual": {},
            "animation": {},
            "pattern": [{"x": 0, "y": 0, "z": 0}]
        });
        assert!(import_full_config(&mut store, &doc));
        assert_eq!(store.visual(), &VisualConfig::default());
        assert_eq!(store.animation(), &AnimationConfig::default());
        assert_eq!(store.pattern_name(), CUSTOM_PATTERN);
    }

    #[test]
    fn test_legacy_bare_array_pattern() {
        let mut store = CubeStore::default();
        let doc = json!({
            "visual": {"cubeSize": 1.0, "gap": 0.5},
            "animation": {"type": "falling", "speed": 0.5, "delay": 0.2},
            "meta": {"patternName": "steps"},
            "pattern": [
                {"x": 0, "y": 0, "z": 0},
                {"x": 1, "y": 1, "z": 1},
                {"x": 2, "y": 2, "z": 2}
            ]
        });
        assert!(import_full_config(&mut store, &doc));
        assert_eq!(store.cube_count(), 3);
        assert_eq!(store.pattern_name(), "steps");
        assert_eq!(store.visual().cube_size, 1.0);
        assert_eq!(store.animation().animation_type, AnimationType::Falling);
        assert_eq!(store.animation().delay, 0.2);
    }

    #[test]
    fn test_empty_pattern_falls_back() {
        let mut store = CubeStore::default();
        let doc = json!({
            "visual": {},
            "animation": {},
            "pattern": {"cubes": []}
        });
        assert!(!import_full_config(&mut store, &doc));
        assert_eq!(store.cube_count(), 98);
        assert_eq!(store.pattern_name(), "hollow");
    }
}
