//! Visual and animation configuration

use serde::{Deserialize, Serialize};

/// Default primary (brand) color
pub const DEFAULT_COLOR_A: &str = "#fc0398";
/// Default accent color
pub const DEFAULT_COLOR_B: &str = "#333333";

// ---------------------------------------------------------------------------
// Visual config
// ---------------------------------------------------------------------------

/// Two-color palette: primary `a` and accent `b`, both hex strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub a: String,
    pub b: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: DEFAULT_COLOR_A.to_string(),
            b: DEFAULT_COLOR_B.to_string(),
        }
    }
}

/// Visual properties of the rendered grid.
///
/// The store does not validate these beyond type; a negative size renders
/// degenerately but is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualConfig {
    /// Primary and accent colors
    pub colors: Palette,
    /// Edge length of a rendered cube (default 0.8)
    pub cube_size: f32,
    /// Spacing between adjacent cube centers beyond `cube_size` (default 0.2)
    pub gap: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            colors: Palette::default(),
            cube_size: 0.8,
            gap: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// Animation config
// ---------------------------------------------------------------------------

/// Named animation waveforms. The waveform math itself lives in the
/// presentation layer; the store only carries the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    None,
    #[default]
    Wave,
    Breathe,
    Twist,
    Scatter,
    Falling,
    Disconnect,
    Assembly,
}

impl AnimationType {
    /// Parse a wire animation name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<AnimationType> {
        match name {
            "none" => Some(AnimationType::None),
            "wave" => Some(AnimationType::Wave),
            "breathe" => Some(AnimationType::Breathe),
            "twist" => Some(AnimationType::Twist),
            "scatter" => Some(AnimationType::Scatter),
            "falling" => Some(AnimationType::Falling),
            "disconnect" => Some(AnimationType::Disconnect),
            "assembly" => Some(AnimationType::Assembly),
            _ => None,
        }
    }

    /// Wire name of this animation
    pub fn name(self) -> &'static str {
        match self {
            AnimationType::None => "none",
            AnimationType::Wave => "wave",
            AnimationType::Breathe => "breathe",
            AnimationType::Twist => "twist",
            AnimationType::Scatter => "scatter",
            AnimationType::Falling => "falling",
            AnimationType::Disconnect => "disconnect",
            AnimationType::Assembly => "assembly",
        }
    }
}

/// Animation parameters consumed by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Selected waveform (default wave)
    #[serde(rename = "type")]
    pub animation_type: AnimationType,
    /// Playback speed multiplier (default 1.0)
    pub speed: f32,
    /// Pointer-influence magnitude (default 0.3)
    pub interaction_factor: f32,
    /// Pointer ripple magnitude (default 0.5)
    pub ripple_interaction_factor: f32,
    /// Stagger seconds between cubes, used by falling/assembly (default 0.1)
    pub delay: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::Wave,
            speed: 1.0,
            interaction_factor: 0.3,
            ripple_interaction_factor: 0.5,
            delay: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let visual = VisualConfig::default();
        assert_eq!(visual.colors.a, DEFAULT_COLOR_A);
        assert_eq!(visual.cube_size, 0.8);
        assert_eq!(visual.gap, 0.2);

        let animation = AnimationConfig::default();
        assert_eq!(animation.animation_type, AnimationType::Wave);
        assert_eq!(animation.speed, 1.0);
        assert_eq!(animation.interaction_factor, 0.3);
    }

    #[test]
    fn test_animation_names_round_trip() {
        for name in ["none", "wave", "breathe", "twist", "scatter", "falling", "disconnect", "assembly"] {
            let ty = AnimationType::from_name(name).unwrap();
            assert_eq!(ty.name(), name);
        }
        assert_eq!(AnimationType::from_name("spiral"), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(AnimationConfig::default()).unwrap();
        assert_eq!(json["type"], "wave");
        assert!(json.get("interactionFactor").is_some());
        assert!(json.get("rippleInteractionFactor").is_some());

        let json = serde_json::to_value(VisualConfig::default()).unwrap();
        assert!(json.get("cubeSize").is_some());
        assert_eq!(json["colors"]["a"], DEFAULT_COLOR_A);
    }
}
