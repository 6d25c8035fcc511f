//! Deterministic series color assignment.
//!
//! Colors are assigned one label at a time, strictly in display order, with
//! an avoid token threaded from each call to the next. The token is what the
//! previous call chose; the next call steers clear of it so adjacent bands in
//! the stack never land on visually adjacent hues. The dependency on
//! evaluation order is kept explicit through [`assign_colors`], a left fold
//! over the ordered label list.

use compact_str::CompactString;
use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

const SATURATION: f32 = 0.55;
const VALUE: f32 = 0.85;

/// Minimum hue separation, in degrees, between consecutive series.
const MIN_HUE_SEPARATION: f32 = 60.0;

/// Display color for one chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub Srgb<u8>);

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Token carrying what the previous assignment chose. Callers thread it
/// through unchanged; only the assigner interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvoidToken {
    hue: f32,
}

/// Assign a color to every label in order, threading the avoid token through
/// an explicit left fold so the order dependency is visible and testable.
///
/// The first call receives no token; every subsequent call receives the token
/// produced by its predecessor.
#[must_use]
pub fn assign_colors<F>(labels: &[CompactString], mut assigner: F) -> Vec<Color>
where
    F: FnMut(&str, Option<&AvoidToken>) -> (Color, AvoidToken),
{
    let mut colors = Vec::with_capacity(labels.len());
    let mut avoid: Option<AvoidToken> = None;

    for label in labels {
        let (color, token) = assigner(label, avoid.as_ref());
        colors.push(color);
        avoid = Some(token);
    }

    colors
}

/// Deterministic label-to-color assignment.
///
/// The label hashes to a hue. When that hue lands within
/// [`MIN_HUE_SEPARATION`] degrees of the avoided hue, it is pushed ahead of
/// the avoided hue by the minimum separation instead.
#[must_use]
pub fn default_assigner(label: &str, avoid: Option<&AvoidToken>) -> (Color, AvoidToken) {
    let mut hue = hash_hue(label);
    if let Some(avoid) = avoid
        && hue_distance(hue, avoid.hue) < MIN_HUE_SEPARATION
    {
        hue = (avoid.hue + MIN_HUE_SEPARATION).rem_euclid(360.0);
    }

    let rgb: Srgb<u8> = Srgb::from_color(Hsv::new(hue, SATURATION, VALUE)).into_format();
    (Color(rgb), AvoidToken { hue })
}

/// FNV-1a over the label bytes, folded into [0, 360).
fn hash_hue(label: &str) -> f32 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in label.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % 360) as f32
}

/// Angular distance between two hues, in [0, 180].
fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}
