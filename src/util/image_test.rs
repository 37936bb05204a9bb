use super::*;

#[test]
fn images_inside_the_cap_are_untouched() {
    assert_eq!(scaled_dimensions(800.0, 600.0, MAX_DIMENSION), (800.0, 600.0));
}

#[test]
fn landscape_images_scale_by_width() {
    let (w, h) = scaled_dimensions(3840.0, 2160.0, MAX_DIMENSION);
    assert_eq!(w, 1920.0);
    assert_eq!(h, 1080.0);
}

#[test]
fn portrait_images_scale_by_height() {
    let (w, h) = scaled_dimensions(1080.0, 3840.0, MAX_DIMENSION);
    assert_eq!(h, 1920.0);
    assert_eq!(w, 540.0);
}

#[test]
fn degenerate_dimensions_pass_through() {
    assert_eq!(scaled_dimensions(0.0, 0.0, MAX_DIMENSION), (0.0, 0.0));
}

#[test]
fn exact_cap_is_not_rescaled() {
    assert_eq!(scaled_dimensions(1920.0, 400.0, MAX_DIMENSION), (1920.0, 400.0));
}
