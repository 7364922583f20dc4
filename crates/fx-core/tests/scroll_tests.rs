// Host-side tests for section stepping.

use fx_core::scroll::next_section;

#[test]
fn scrolling_down_steps_forward() {
    assert_eq!(next_section(0, 3, 120.0), 1);
    assert_eq!(next_section(1, 3, 1.0), 2);
}

#[test]
fn scrolling_up_steps_backward() {
    assert_eq!(next_section(2, 3, -120.0), 1);
    assert_eq!(next_section(1, 3, -1.0), 0);
}

#[test]
fn ends_absorb_further_scrolling() {
    assert_eq!(next_section(0, 3, -120.0), 0);
    assert_eq!(next_section(2, 3, 120.0), 2);
}

#[test]
fn zero_delta_holds_position() {
    assert_eq!(next_section(1, 3, 0.0), 1);
}

#[test]
fn empty_page_stays_at_zero() {
    assert_eq!(next_section(0, 0, 120.0), 0);
    assert_eq!(next_section(5, 0, -120.0), 0);
}

#[test]
fn out_of_range_index_is_clamped() {
    // A stale index past the end settles back onto the last section.
    assert_eq!(next_section(10, 3, 0.0), 2);
}
