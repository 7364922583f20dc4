//! Section stepping for the wheel-driven snap navigator: a linear
//! index moved one section per wheel gesture and clamped to the page.

/// Next section index for a wheel delta. Positive delta steps down the
/// page, negative steps up; the ends absorb further scrolling.
#[inline]
pub fn next_section(current: usize, section_count: usize, delta_y: f64) -> usize {
    if section_count == 0 {
        return 0;
    }
    if delta_y > 0.0 && current + 1 < section_count {
        current + 1
    } else if delta_y < 0.0 && current > 0 {
        current - 1
    } else {
        current.min(section_count - 1)
    }
}
