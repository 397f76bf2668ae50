//! Inline style strings for the translated scene groups.
//!
//! The browser does the interpolation; this module only describes the target
//! transform and the transition that should smooth the way there.

use crate::constants::{CORE_TRANSITION_SEC, GUARDRAIL_TRANSITION_SEC};
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    pub property: &'static str,
    pub duration_sec: f32,
    pub easing: Easing,
}

impl TransitionSpec {
    pub const fn transform(duration_sec: f32, easing: Easing) -> Self {
        Self {
            property: "transform",
            duration_sec,
            easing,
        }
    }

    pub const GUARDRAIL: Self = Self::transform(GUARDRAIL_TRANSITION_SEC, Easing::EaseOut);
    pub const CORE: Self = Self::transform(CORE_TRANSITION_SEC, Easing::EaseOut);
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.property,
            self.duration_sec,
            self.easing.as_css()
        )
    }
}

/// `translate(Xpx, Ypx)` as a CSS transform value.
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Full inline style for a group translated by `offset`.
pub fn translate_style(offset: Vec2, transition: &TransitionSpec) -> String {
    format!(
        "transform: {}; transition: {}",
        translate_css(offset),
        transition
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guardrail_style_matches_css() {
        let style = translate_style(Vec2::new(10.0, -2.5), &TransitionSpec::GUARDRAIL);
        assert_eq!(
            style,
            "transform: translate(10px, -2.5px); transition: transform 0.3s ease-out"
        );
    }

    #[test]
    fn core_transition_is_quicker() {
        assert_eq!(TransitionSpec::CORE.to_string(), "transform 0.2s ease-out");
        assert!(TransitionSpec::CORE.duration_sec < TransitionSpec::GUARDRAIL.duration_sec);
    }

    #[test]
    fn zero_offset_formats_plainly() {
        assert_eq!(translate_css(Vec2::ZERO), "translate(0px, 0px)");
    }
}
