//! Pure logic for the per-character text glow: glyph segmentation,
//! distance falloff, and the inline CSS written onto each character
//! element. The DOM side lives in the web frontend; everything here is
//! platform-independent and tested natively.

use crate::constants::{GLOW_BLUR_MAX_PX, GLOW_RADIUS_PX, GLOW_RGB, GLOW_SHADOW_ALPHA};
use glam::Vec2;

/// Non-breaking space, substituted for whitespace so the browser does
/// not collapse runs of spaces and shift subsequent character boxes.
pub const NBSP: char = '\u{a0}';

/// One segmented character: what the text contained and what is
/// actually placed in the character element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub source: char,
    pub rendered: char,
}

/// Split text into per-character glyphs, in order. Whitespace renders
/// as [`NBSP`] but keeps its original char in `source`, so the glyphs
/// concatenate back to the input.
pub fn segment_text(text: &str) -> Vec<Glyph> {
    text.chars()
        .map(|c| Glyph {
            source: c,
            rendered: if c.is_whitespace() { NBSP } else { c },
        })
        .collect()
}

/// How often the glow recompute runs relative to raw pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplePolicy {
    /// Full recompute on every pointer event, matching the event stream.
    #[default]
    EveryEvent,
    /// Coalesce bursts of events to one recompute per animation frame.
    /// The latest position is never dropped, only earlier ones.
    FrameAligned,
}

/// Center of a bounding box given in CSS pixels.
#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new(
        (left + width / 2.0) as f32,
        (top + height / 2.0) as f32,
    )
}

/// Linear falloff in `(0, 1]` inside the glow radius; `None` at or
/// beyond it (the boundary itself is inactive).
#[inline]
pub fn intensity(distance: f32) -> Option<f32> {
    (distance < GLOW_RADIUS_PX).then(|| 1.0 - distance / GLOW_RADIUS_PX)
}

/// Inline style values applied to an active character element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlowStyle {
    pub color: String,
    pub text_shadow: String,
}

/// Build the CSS for a given intensity: color alpha tracks intensity
/// directly, the shadow scales both its blur and alpha with it.
pub fn style_for(intensity: f32) -> GlowStyle {
    let [r, g, b] = GLOW_RGB;
    GlowStyle {
        color: format!("rgba({}, {}, {}, {})", r, g, b, intensity),
        text_shadow: format!(
            "0 0 {}px rgba({}, {}, {}, {})",
            GLOW_BLUR_MAX_PX * intensity,
            r,
            g,
            b,
            intensity * GLOW_SHADOW_ALPHA
        ),
    }
}

/// One full glow decision for a character: `Some(style)` to apply when
/// the pointer is within range of the box center, `None` to clear.
#[inline]
pub fn style_at(pointer: Vec2, center: Vec2) -> Option<GlowStyle> {
    intensity(pointer.distance(center)).map(style_for)
}
