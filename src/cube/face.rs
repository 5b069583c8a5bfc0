//! Cube faces and per-face color slots

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;

/// One of the six faces of a voxel cube.
///
/// Face names are the fixed wire vocabulary; the local axis mapping is
/// `front/back = ±Z`, `right/left = ±X`, `top/bottom = ±Y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// All faces in canonical order
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Parse a wire face name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Face> {
        match name {
            "front" => Some(Face::Front),
            "back" => Some(Face::Back),
            "left" => Some(Face::Left),
            "right" => Some(Face::Right),
            "top" => Some(Face::Top),
            "bottom" => Some(Face::Bottom),
            _ => None,
        }
    }

    /// Wire name of this face
    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    /// Outward normal in local cube space
    pub fn normal(self) -> IVec3 {
        match self {
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
            Face::Left => IVec3::NEG_X,
            Face::Right => IVec3::X,
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
        }
    }

    /// Stable index 0-5, canonical order
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Which of the two palette colors a face renders in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSlot {
    /// Primary color (the default for unmarked faces)
    #[default]
    A,
    /// Accent color
    B,
}

impl ColorSlot {
    /// Parse a wire slot name ("a" or "b")
    pub fn from_name(name: &str) -> Option<ColorSlot> {
        match name {
            "a" => Some(ColorSlot::A),
            "b" => Some(ColorSlot::B),
            _ => None,
        }
    }

    /// Wire name of this slot
    pub fn name(self) -> &'static str {
        match self {
            ColorSlot::A => "a",
            ColorSlot::B => "b",
        }
    }
}

/// Per-voxel face color assignment.
///
/// Stores only the accent faces as a six-bit set. A face that is not in
/// the set renders in the primary color, so an explicit primary
/// assignment and no assignment are the same state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideColors(u8);

impl SideColors {
    /// No accent faces
    pub const EMPTY: SideColors = SideColors(0);

    /// Resolve the color slot for a face
    pub fn slot(self, face: Face) -> ColorSlot {
        if self.is_accent(face) { ColorSlot::B } else { ColorSlot::A }
    }

    /// Check if a face is accent colored
    pub fn is_accent(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    /// Assign a slot to a face. Primary assignments clear the bit, which
    /// keeps the representation normalized.
    pub fn set(&mut self, face: Face, slot: ColorSlot) {
        match slot {
            ColorSlot::B => self.0 |= face.bit(),
            ColorSlot::A => self.0 &= !face.bit(),
        }
    }

    /// Flip a face between primary and accent
    pub fn toggle(&mut self, face: Face) {
        self.0 ^= face.bit();
    }

    /// Reset every face to the primary color
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// True when no face is accent colored
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of accent faces
    pub fn accent_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the accent faces in canonical order
    pub fn accent_faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.is_accent(*f))
    }

    /// Resolved slot per face, indexed by [`Face::index`]
    pub fn resolved(self) -> [ColorSlot; 6] {
        let mut out = [ColorSlot::A; 6];
        for face in self.accent_faces() {
            out[face.index()] = ColorSlot::B;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_names_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_name(face.name()), Some(face));
        }
        assert_eq!(Face::from_name("diagonal"), None);
    }

    #[test]
    fn test_face_normals_cover_axes() {
        let sum = Face::ALL
            .iter()
            .fold(IVec3::ZERO, |acc, f| acc + f.normal());
        assert_eq!(sum, IVec3::ZERO);
        assert_eq!(Face::Front.normal(), -Face::Back.normal());
        assert_eq!(Face::Right.normal(), -Face::Left.normal());
        assert_eq!(Face::Top.normal(), -Face::Bottom.normal());
    }

    #[test]
    fn test_set_primary_equals_clear() {
        let mut sides = SideColors::EMPTY;
        sides.set(Face::Front, ColorSlot::B);
        assert!(sides.is_accent(Face::Front));
        assert_eq!(sides.slot(Face::Front), ColorSlot::B);

        sides.set(Face::Front, ColorSlot::A);
        assert!(sides.is_empty());
        assert_eq!(sides, SideColors::EMPTY);
    }

    #[test]
    fn test_toggle_flips() {
        let mut sides = SideColors::EMPTY;
        sides.toggle(Face::Top);
        assert!(sides.is_accent(Face::Top));
        sides.toggle(Face::Top);
        assert!(!sides.is_accent(Face::Top));
    }

    #[test]
    fn test_resolved_slots() {
        let mut sides = SideColors::EMPTY;
        sides.set(Face::Back, ColorSlot::B);
        sides.set(Face::Bottom, ColorSlot::B);
        let resolved = sides.resolved();
        assert_eq!(resolved[Face::Back.index()], ColorSlot::B);
        assert_eq!(resolved[Face::Bottom.index()], ColorSlot::B);
        assert_eq!(resolved[Face::Front.index()], ColorSlot::A);
        assert_eq!(sides.accent_count(), 2);
    }
}
