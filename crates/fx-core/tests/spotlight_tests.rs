// Host-side tests for the spotlight gradient string.

use fx_core::spotlight::gradient_css;

#[test]
fn gradient_is_centered_on_the_pointer() {
    let css = gradient_css(120.0, 45.0);
    assert_eq!(
        css,
        "radial-gradient(circle at 120px 45px, rgb(55, 135, 132, 0.1) 100px, rgb(15, 23, 42, 0.95) 400px)"
    );
}

#[test]
fn gradient_keeps_fractional_coordinates() {
    let css = gradient_css(0.5, 10.25);
    assert!(css.starts_with("radial-gradient(circle at 0.5px 10.25px,"));
}
