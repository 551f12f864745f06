#![cfg(not(target_arch = "wasm32"))]

use swirl_wasm::frame::{run_frame, FrameClock, FrameInputs, Pointer, SurfaceSize};

#[test]
fn pointer_normalizes_into_unit_square() {
    let cases = [
        (0.0, 0.0),
        (800.0, 0.0),
        (0.0, 600.0),
        (800.0, 600.0),
        (400.0, 300.0),
        (123.0, 456.0),
    ];
    for (px, py) in cases {
        let p = Pointer::from_client(px, py, 800.0, 600.0);
        assert!((0.0..=1.0).contains(&p.x), "x={} for px={px}", p.x);
        assert!((0.0..=1.0).contains(&p.y), "y={} for py={py}", p.y);
    }
}

#[test]
fn pointer_y_is_inverted() {
    // Pixel y=0 (top of the viewport) maps to normalized y=1.
    assert_eq!(Pointer::from_client(0.0, 0.0, 800.0, 600.0).y, 1.0);
    assert_eq!(Pointer::from_client(0.0, 600.0, 800.0, 600.0).y, 0.0);

    let mid = Pointer::from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!(mid, Pointer { x: 0.5, y: 0.5 });
}

#[test]
fn pointer_defaults_to_center() {
    assert_eq!(Pointer::default(), Pointer { x: 0.5, y: 0.5 });
}

#[test]
fn surface_size_matches_viewport() {
    for (w, h) in [(1.0, 1.0), (800.0, 600.0), (1920.0, 1080.0), (333.0, 777.0)] {
        let size = SurfaceSize::from_viewport(w, h);
        assert_eq!(size.width, w as u32);
        assert_eq!(size.height, h as u32);
    }
}

#[test]
fn surface_resize_is_idempotent() {
    let once = SurfaceSize::from_viewport(1024.0, 768.0);
    let twice = SurfaceSize::from_viewport(1024.0, 768.0);
    assert_eq!(once, twice);
}

#[test]
fn clock_starts_at_zero_and_is_monotonic() {
    let mut clock = FrameClock::new();
    // requestAnimationFrame timestamps use an arbitrary epoch.
    assert_eq!(clock.tick(98_765.0), 0.0);
    let t1 = clock.tick(98_781.7);
    let t2 = clock.tick(98_798.4);
    assert!(t1 > 0.0);
    assert!(t2 > t1);
}

#[test]
fn two_refresh_callbacks_produce_two_draws() {
    let mut clock = FrameClock::new();
    let size = SurfaceSize {
        width: 800,
        height: 600,
    };
    let pointer = Pointer { x: 0.25, y: 0.75 };

    let mut frames: Vec<FrameInputs> = Vec::new();
    let mut draw = |inputs: &FrameInputs| frames.push(*inputs);

    run_frame(&mut clock, size, pointer, 5000.0, &mut draw);
    run_frame(&mut clock, size, pointer, 5016.7, &mut draw);

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].time, 0.0);
    assert!(frames[1].time > frames[0].time);
    assert_eq!(frames[0].resolution, [800.0, 600.0]);
    assert_eq!(frames[0].mouse, pointer);
}
