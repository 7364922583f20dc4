// Host-side tests for constants and their relationships.

use fx_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // The glow radius and blur must be positive distances
    assert!(GLOW_RADIUS_PX > 0.0);
    assert!(GLOW_BLUR_MAX_PX > 0.0);

    // The shadow alpha is a fraction of intensity
    assert!(GLOW_SHADOW_ALPHA > 0.0 && GLOW_SHADOW_ALPHA <= 1.0);

    // The spotlight falloff must extend beyond its lit center
    assert!(SPOTLIGHT_OUTER_RADIUS_PX > SPOTLIGHT_INNER_RADIUS_PX);
}

#[test]
fn glow_falloff_reaches_zero_at_the_radius() {
    // The linear falloff pinned to these constants: full at the
    // pointer, gone at the radius edge.
    assert_eq!(fx_core::glow::intensity(0.0), Some(1.0));
    assert_eq!(fx_core::glow::intensity(GLOW_RADIUS_PX), None);
    let near_edge = fx_core::glow::intensity(GLOW_RADIUS_PX - 1.0).unwrap();
    assert!(near_edge > 0.0 && near_edge < 0.02);
}
