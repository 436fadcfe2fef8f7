use loadburst_core::{
    cubic_bezier, ease_in_back, ease_in_back_with, ease_in_cubic, ease_in_out_cubic,
    ease_out_cubic, Point,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn easings_are_boundary_exact() {
    // f(0) == b and f(d) == b + c, exactly, for each variant.
    let cases: [fn(f32, f32, f32, f32) -> f32; 4] = [
        ease_in_cubic,
        ease_out_cubic,
        ease_in_out_cubic,
        ease_in_back,
    ];
    for f in cases {
        for (b, c, d) in [(0.0, 1.0, 1.0), (2.0, -3.0, 0.4), (-1.0, 4.0, 5.0)] {
            assert_eq!(f(0.0, b, c, d), b);
            assert_eq!(f(d, b, c, d), b + c);
        }
    }
}

#[test]
fn in_out_cubic_is_symmetric_around_midpoint() {
    let d = 2.0;
    approx(ease_in_out_cubic(1.0, 0.0, 1.0, d), 0.5, 1e-6);
    let lo = ease_in_out_cubic(0.5, 0.0, 1.0, d);
    let hi = ease_in_out_cubic(1.5, 0.0, 1.0, d);
    approx(lo + hi, 1.0, 1e-6);
}

#[test]
fn out_cubic_decelerates() {
    // First half covers more ground than the second.
    let first = ease_out_cubic(0.5, 0.0, 1.0, 1.0);
    assert!(first > 0.5);
    assert!(ease_out_cubic(0.75, 0.0, 1.0, 1.0) > first);
}

#[test]
fn in_back_dips_below_start() {
    let early = ease_in_back(0.1, 0.0, 1.0, 1.0);
    assert!(early < 0.0, "expected early dip, got {early}");
    // A larger overshoot constant dips deeper.
    let deeper = ease_in_back_with(0.1, 0.0, 1.0, 1.0, 3.0);
    assert!(deeper < early);
}

#[test]
fn bezier_endpoints_are_exact() {
    let p0 = Point::new(1.0, 2.0);
    let c0 = Point::new(-40.0, 17.0);
    let c1 = Point::new(300.0, -5.5);
    let p1 = Point::new(12.0, 64.0);
    assert_eq!(cubic_bezier(p0, c0, c1, p1, 0.0), p0);
    assert_eq!(cubic_bezier(p0, c0, c1, p1, 1.0), p1);
}

#[test]
fn bezier_midpoint_matches_closed_form() {
    // At t = 1/2 the weights are 1/8, 3/8, 3/8, 1/8.
    let p0 = Point::new(0.0, 0.0);
    let c0 = Point::new(8.0, 0.0);
    let c1 = Point::new(0.0, 8.0);
    let p1 = Point::new(8.0, 8.0);
    let mid = cubic_bezier(p0, c0, c1, p1, 0.5);
    approx(mid.x, 4.0, 1e-6);
    approx(mid.y, 4.0, 1e-6);
}

#[test]
fn bezier_collinear_controls_stay_on_segment() {
    let p0 = Point::new(0.0, 0.0);
    let c0 = Point::new(1.0, 1.0);
    let c1 = Point::new(2.0, 2.0);
    let p1 = Point::new(3.0, 3.0);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = cubic_bezier(p0, c0, c1, p1, t);
        approx(p.x, p.y, 1e-5);
    }
}
