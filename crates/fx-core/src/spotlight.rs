//! Pointer-tracking spotlight background: one radial gradient string
//! per pointer position, written to the spotlight element's inline
//! background by the web frontend.

use crate::constants::{
    SPOTLIGHT_INNER_COLOR, SPOTLIGHT_INNER_RADIUS_PX, SPOTLIGHT_OUTER_COLOR,
    SPOTLIGHT_OUTER_RADIUS_PX,
};

/// Radial gradient centered on the pointer, in CSS pixel coordinates.
pub fn gradient_css(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, {} {}px, {} {}px)",
        x,
        y,
        SPOTLIGHT_INNER_COLOR,
        SPOTLIGHT_INNER_RADIUS_PX,
        SPOTLIGHT_OUTER_COLOR,
        SPOTLIGHT_OUTER_RADIUS_PX
    )
}
