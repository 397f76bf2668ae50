//! Pointer-to-offset mapping.
//!
//! A single pointer sample is turned into three independent coordinate pairs:
//! the aura centre in the 0..200 scene space, and two clamped parallax offsets
//! derived from the pointer's displacement from the viewport centre.

use crate::constants::{
    aura_offscreen_vec2, AURA_OFFSCREEN, CORE_MAX_OFFSET, CORE_MOVE_FACTOR, GUARDRAIL_MAX_OFFSET,
    GUARDRAIL_MOVE_FACTOR, VIEWBOX_SIZE,
};
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ViewportError {
    #[error("viewport must have positive, finite dimensions (got {width}x{height})")]
    Degenerate { width: f32, height: f32 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TuningError {
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("core {name} ({core}) must exceed the guardrail {name} ({guardrail})")]
    CoreNotLooser {
        name: &'static str,
        core: f32,
        guardrail: f32,
    },
}

/// Visible area the pointer moves over, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ViewportError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if usable(width) && usable(height) {
            Ok(Self { width, height })
        } else {
            Err(ViewportError::Degenerate { width, height })
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// Raw client coordinates of one pointer-move event plus the viewport they
/// were measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client: Vec2,
    pub viewport: Viewport,
}

impl PointerSample {
    pub fn new(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            client: Vec2::new(client_x, client_y),
            viewport,
        }
    }

    /// Pointer position relative to the viewport centre.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.client - self.viewport.center()
    }
}

/// Scale factors and per-axis clamp bounds for the two parallax layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTuning {
    pub guardrail_factor: f32,
    pub guardrail_max: f32,
    pub core_factor: f32,
    pub core_max: f32,
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            guardrail_factor: GUARDRAIL_MOVE_FACTOR,
            guardrail_max: GUARDRAIL_MAX_OFFSET,
            core_factor: CORE_MOVE_FACTOR,
            core_max: CORE_MAX_OFFSET,
        }
    }
}

impl ParallaxTuning {
    /// Check that every value is positive and that the core layer is both
    /// faster and looser than the guardrail layer.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("guardrail factor", self.guardrail_factor),
            ("guardrail bound", self.guardrail_max),
            ("core factor", self.core_factor),
            ("core bound", self.core_max),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if self.core_factor <= self.guardrail_factor {
            return Err(TuningError::CoreNotLooser {
                name: "factor",
                core: self.core_factor,
                guardrail: self.guardrail_factor,
            });
        }
        if self.core_max <= self.guardrail_max {
            return Err(TuningError::CoreNotLooser {
                name: "bound",
                core: self.core_max,
                guardrail: self.guardrail_max,
            });
        }
        Ok(())
    }
}

/// The three coordinate pairs that drive the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Aura centre in scene space (0..200 while the pointer is inside the viewport).
    pub aura: Vec2,
    /// Translation of the outer lines/nodes group.
    pub guardrail: Vec2,
    /// Translation of the core group, relative to the guardrail group.
    pub core: Vec2,
}

impl ParallaxFrame {
    /// State before any pointer input: aura parked off-scene, no offsets.
    pub const INITIAL: Self = Self {
        aura: Vec2::new(AURA_OFFSCREEN[0], AURA_OFFSCREEN[1]),
        guardrail: Vec2::ZERO,
        core: Vec2::ZERO,
    };

    /// Where the core actually ends up, since its group is nested inside the
    /// guardrail group.
    #[inline]
    pub fn core_effective_offset(&self) -> Vec2 {
        self.guardrail + self.core
    }

    #[inline]
    pub fn aura_is_offscreen(&self) -> bool {
        self.aura == aura_offscreen_vec2()
    }
}

impl Default for ParallaxFrame {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[inline]
pub fn aura_position(sample: &PointerSample) -> Vec2 {
    sample.client / sample.viewport.size() * VIEWBOX_SIZE
}

#[inline]
pub fn clamped_offset(displacement: Vec2, factor: f32, max: f32) -> Vec2 {
    (displacement * factor).clamp(Vec2::splat(-max), Vec2::splat(max))
}

/// Map one pointer sample to a fresh frame. Every field is recomputed; nothing
/// is carried over from earlier samples.
pub fn map_pointer(sample: &PointerSample, tuning: &ParallaxTuning) -> ParallaxFrame {
    let displacement = sample.displacement();
    ParallaxFrame {
        aura: aura_position(sample),
        guardrail: clamped_offset(displacement, tuning.guardrail_factor, tuning.guardrail_max),
        core: clamped_offset(displacement, tuning.core_factor, tuning.core_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPS
    }

    fn sample(x: f32, y: f32, w: f32, h: f32) -> PointerSample {
        PointerSample::new(x, y, Viewport::new(w, h).unwrap())
    }

    #[test]
    fn right_edge_example_hits_both_bounds() {
        let frame = map_pointer(
            &sample(1000.0, 500.0, 1000.0, 1000.0),
            &ParallaxTuning::default(),
        );
        assert!(
            approx(frame.aura, Vec2::new(200.0, 100.0)),
            "{:?}",
            frame.aura
        );
        assert!(
            approx(frame.guardrail, Vec2::new(10.0, 0.0)),
            "{:?}",
            frame.guardrail
        );
        assert!(approx(frame.core, Vec2::new(40.0, 0.0)), "{:?}", frame.core);
    }

    #[test]
    fn centre_of_viewport_has_no_offset() {
        let frame = map_pointer(
            &sample(640.0, 360.0, 1280.0, 720.0),
            &ParallaxTuning::default(),
        );
        assert_eq!(frame.guardrail, Vec2::ZERO);
        assert_eq!(frame.core, Vec2::ZERO);
        assert!(approx(frame.aura, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn small_displacement_is_scaled_not_clamped() {
        // dx = 100, dy = -50
        let frame = map_pointer(
            &sample(500.0, 350.0, 800.0, 800.0),
            &ParallaxTuning::default(),
        );
        assert!(
            approx(frame.guardrail, Vec2::new(2.0, -1.0)),
            "{:?}",
            frame.guardrail
        );
        assert!(approx(frame.core, Vec2::new(8.0, -4.0)), "{:?}", frame.core);
    }

    #[test]
    fn far_outside_viewport_saturates() {
        let frame = map_pointer(
            &sample(-5000.0, 9000.0, 1000.0, 1000.0),
            &ParallaxTuning::default(),
        );
        assert_eq!(frame.guardrail, Vec2::new(-10.0, 10.0));
        assert_eq!(frame.core, Vec2::new(-40.0, 40.0));
        // the aura is not clamped
        assert!(frame.aura.x < 0.0 && frame.aura.y > VIEWBOX_SIZE);
    }

    #[test]
    fn axes_are_independent() {
        let frame = map_pointer(
            &sample(1000.0, 510.0, 1000.0, 1000.0),
            &ParallaxTuning::default(),
        );
        assert!(approx(frame.guardrail, Vec2::new(10.0, 0.2)));
        assert!(approx(frame.core, Vec2::new(40.0, 0.8)));
    }

    #[test]
    fn initial_frame_is_offscreen_and_still() {
        let frame = ParallaxFrame::default();
        assert_eq!(frame.aura, Vec2::new(-200.0, -200.0));
        assert!(frame.aura_is_offscreen());
        assert_eq!(frame.guardrail, Vec2::ZERO);
        assert_eq!(frame.core, Vec2::ZERO);
    }

    #[test]
    fn core_offset_composes_with_guardrail() {
        let frame = ParallaxFrame {
            aura: Vec2::ZERO,
            guardrail: Vec2::new(3.0, -2.0),
            core: Vec2::new(12.0, -8.0),
        };
        assert_eq!(frame.core_effective_offset(), Vec2::new(15.0, -10.0));
    }

    #[test]
    fn viewport_rejects_degenerate_sizes() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 100.0).is_err());
        assert!(Viewport::new(f32::INFINITY, 100.0).is_err());
        assert_eq!(Viewport::new(1.0, 1.0).unwrap().center(), Vec2::splat(0.5));
    }

    #[test]
    fn default_tuning_is_valid() {
        assert_eq!(ParallaxTuning::default().validate(), Ok(()));
    }

    #[test]
    fn tuning_must_keep_core_looser() {
        let swapped = ParallaxTuning {
            guardrail_factor: 0.08,
            core_factor: 0.02,
            ..ParallaxTuning::default()
        };
        assert!(matches!(
            swapped.validate(),
            Err(TuningError::CoreNotLooser { name: "factor", .. })
        ));

        let tight_core = ParallaxTuning {
            core_max: 10.0,
            ..ParallaxTuning::default()
        };
        assert!(matches!(
            tight_core.validate(),
            Err(TuningError::CoreNotLooser { name: "bound", .. })
        ));

        let zero = ParallaxTuning {
            guardrail_max: 0.0,
            ..ParallaxTuning::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(TuningError::NonPositive { .. })
        ));
    }
}
