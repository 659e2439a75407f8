use super::*;

#[test]
fn scalar_lerp_is_exact_at_endpoints() {
    assert_eq!(f64::lerp(&2.0, &10.0, 0.0), 2.0);
    assert_eq!(f64::lerp(&2.0, &10.0, 1.0), 10.0);
    assert_eq!(f64::lerp(&2.0, &10.0, 0.5), 6.0);
    assert_eq!(f32::lerp(&1.0, &3.0, 0.5), 2.0);
}

#[test]
fn color_lerp_is_per_channel_with_rounding() {
    let a = Rgba8::opaque(0, 10, 255);
    let b = Rgba8::opaque(255, 20, 0);
    let mid = Rgba8::lerp(&a, &b, 0.5);
    assert_eq!(mid.r, 128); // 127.5 rounds up
    assert_eq!(mid.g, 15);
    assert_eq!(mid.b, 128);
    assert_eq!(mid.a, 255);
}

#[test]
fn color_lerp_pins_endpoints() {
    let a = Rgba8 {
        r: 1,
        g: 2,
        b: 3,
        a: 40,
    };
    let b = Rgba8 {
        r: 200,
        g: 100,
        b: 0,
        a: 255,
    };
    assert_eq!(Rgba8::lerp(&a, &b, 0.0), a);
    assert_eq!(Rgba8::lerp(&a, &b, 1.0), b);
}

#[test]
fn color_lerp_stays_between_channel_values() {
    let a = Rgba8::opaque(10, 240, 60);
    let b = Rgba8::opaque(250, 0, 61);
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        let c = Rgba8::lerp(&a, &b, t);
        assert!((10..=250).contains(&c.r));
        assert!((0..=240).contains(&c.g));
        assert!((60..=61).contains(&c.b));
    }
}
