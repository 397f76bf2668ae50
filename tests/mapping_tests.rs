// Host-side checks of the pointer mapping across a spread of viewports.

use aura_core::*;
use glam::Vec2;

const VIEWPORTS: [(f32, f32); 4] = [
    (1.0, 1.0),
    (390.0, 844.0),
    (1280.0, 720.0),
    (3840.0, 2160.0),
];

fn frame_at(x: f32, y: f32, w: f32, h: f32) -> ParallaxFrame {
    let viewport = Viewport::new(w, h).unwrap();
    map_pointer(
        &PointerSample::new(x, y, viewport),
        &ParallaxTuning::default(),
    )
}

#[test]
fn aura_hits_scene_edges_at_viewport_edges() {
    for (w, h) in VIEWPORTS {
        let top_left = frame_at(0.0, 0.0, w, h);
        assert_eq!(top_left.aura, Vec2::ZERO);
        let bottom_right = frame_at(w, h, w, h);
        assert!(
            (bottom_right.aura - Vec2::splat(VIEWBOX_SIZE))
                .abs()
                .max_element()
                < 1e-3
        );
    }
}

#[test]
fn aura_is_monotonic_and_inside_scene_for_inside_pointer() {
    for (w, h) in VIEWPORTS {
        let mut prev = f32::MIN;
        for step in 0..=20 {
            let x = w * step as f32 / 20.0;
            let aura = frame_at(x, h * 0.5, w, h).aura;
            assert!(aura.x >= prev, "not monotonic at {} in {}x{}", x, w, h);
            assert!((0.0..=VIEWBOX_SIZE + 1e-3).contains(&aura.x));
            prev = aura.x;
        }
        assert!(frame_at(-1.0, 0.0, w, h).aura.x < 0.0);
        assert!(frame_at(w + 1.0, 0.0, w, h).aura.x > VIEWBOX_SIZE);
    }
}

#[test]
fn offsets_never_exceed_their_bounds() {
    for (w, h) in VIEWPORTS {
        for sx in -4..=4 {
            for sy in -4..=4 {
                // from far outside to far outside, through the centre
                let x = w * 0.5 + sx as f32 * w;
                let y = h * 0.5 + sy as f32 * h;
                let frame = frame_at(x, y, w, h);
                assert!(frame.guardrail.abs().max_element() <= GUARDRAIL_MAX_OFFSET);
                assert!(frame.core.abs().max_element() <= CORE_MAX_OFFSET);
            }
        }
    }
}

#[test]
fn offsets_are_linear_below_the_bound() {
    let (w, h) = (2000.0, 2000.0);
    // dx = 300 -> guardrail 6, core 24, both unclamped
    let frame = frame_at(1300.0, 1000.0, w, h);
    assert!((frame.guardrail.x - 6.0).abs() < 1e-4);
    assert!((frame.core.x - 24.0).abs() < 1e-4);
    // dx = 600 -> guardrail clamped from 12, core 48 clamped to 40
    let frame = frame_at(1600.0, 1000.0, w, h);
    assert_eq!(frame.guardrail.x, GUARDRAIL_MAX_OFFSET);
    assert_eq!(frame.core.x, CORE_MAX_OFFSET);
}

#[test]
fn centre_is_still_for_every_viewport() {
    for (w, h) in VIEWPORTS {
        let frame = frame_at(w / 2.0, h / 2.0, w, h);
        assert_eq!(frame.guardrail, Vec2::ZERO);
        assert_eq!(frame.core, Vec2::ZERO);
    }
}
