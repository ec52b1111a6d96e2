use linprobe_testers::squeeze_factor;

#[test]
fn points_inside_the_ball_are_not_squeezed() {
    assert_eq!(squeeze_factor(&[0.0, 0.0], 1.0), 1);
    assert_eq!(squeeze_factor(&[0.5, 0.0], 1.0), 1);
}

#[test]
fn norm_equal_to_the_radius_is_still_inside() {
    assert_eq!(squeeze_factor(&[1.0], 1.0), 1);
    assert_eq!(squeeze_factor(&[3.0, 4.0], 5.0), 1);
}

#[test]
fn ceiling_semantics_at_multiples_of_the_radius() {
    // norm in (k * radius, (k + 1) * radius] squeezes by k + 1
    assert_eq!(squeeze_factor(&[2.5], 1.0), 3);
    assert_eq!(squeeze_factor(&[2.0], 1.0), 2);
    assert_eq!(squeeze_factor(&[1.0 + 1e-9], 1.0), 2);
}

#[test]
fn default_radius_scale() {
    // radius 1/50: a unit vector squeezes by 50
    assert_eq!(squeeze_factor(&[1.0], 1.0 / 50.0), 50);
    assert_eq!(squeeze_factor(&[0.01], 1.0 / 50.0), 1);
}
