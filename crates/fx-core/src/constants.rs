use crate::glow::SamplePolicy;

// Shared visual tuning constants used by the web frontend.

// Text glow
pub const GLOW_RADIUS_PX: f32 = 100.0; // activation radius around the pointer (strict <)
pub const GLOW_RGB: [u8; 3] = [85, 209, 192]; // teal accent shared by color and shadow
pub const GLOW_BLUR_MAX_PX: f32 = 8.0; // shadow blur at full intensity
pub const GLOW_SHADOW_ALPHA: f32 = 0.8; // shadow alpha as a fraction of intensity

// Spotlight background
pub const SPOTLIGHT_INNER_RADIUS_PX: u32 = 100; // fully lit circle around the pointer
pub const SPOTLIGHT_OUTER_RADIUS_PX: u32 = 400; // falloff to the page background
pub const SPOTLIGHT_INNER_COLOR: &str = "rgb(55, 135, 132, 0.1)";
pub const SPOTLIGHT_OUTER_COLOR: &str = "rgb(15, 23, 42, 0.95)";

// Pointer sampling for the glow recompute
pub const SAMPLE_POLICY: SamplePolicy = SamplePolicy::EveryEvent;
