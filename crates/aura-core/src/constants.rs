use glam::Vec2;

// Shared motion and scene tuning constants used by the web frontend.

// Scene space
pub const VIEWBOX_SIZE: f32 = 200.0; // side of the square abstract coordinate space
pub const SCENE_CENTER: f32 = 100.0; // origin of the spoke/node groups
pub const AURA_OFFSCREEN: [f32; 2] = [-200.0, -200.0]; // aura position before the first sample

// Guardrail motion: the outer lines/nodes drift a little
pub const GUARDRAIL_MOVE_FACTOR: f32 = 0.02; // px of offset per px of displacement
pub const GUARDRAIL_MAX_OFFSET: f32 = 10.0; // per-axis clamp

// Core motion: the glowing centre follows the pointer more eagerly
pub const CORE_MOVE_FACTOR: f32 = 0.08;
pub const CORE_MAX_OFFSET: f32 = 40.0; // stays inside the guardrail ring

// Transitions (seconds)
pub const GUARDRAIL_TRANSITION_SEC: f32 = 0.3;
pub const CORE_TRANSITION_SEC: f32 = 0.2;

// Scene geometry, relative to SCENE_CENTER
pub const SPOKE_ENDPOINTS: [[f32; 2]; 8] = [
    [-70.0, -70.0],
    [0.0, -80.0],
    [70.0, -70.0],
    [80.0, 0.0],
    [70.0, 70.0],
    [0.0, 80.0],
    [-70.0, 70.0],
    [-80.0, 0.0],
];
pub const NODE_RADIUS: f32 = 5.0;
pub const CORE_RADIUS: f32 = 20.0;
pub const AURA_RADIUS: f32 = 60.0;

// Glow filter and aura gradient
pub const GLOW_STD_DEVIATION: f32 = 3.5;
pub const AURA_COLOR: &str = "#67e8f9"; // cyan-300
pub const AURA_INNER_OPACITY: f32 = 0.4;

// Stroke/fill for the static parts; the moving parts only get transforms
pub const SCENE_CSS: &str = ".lines line { stroke: #334155; stroke-width: 1; } \
.nodes circle { fill: #475569; } \
.core { fill: #67e8f9; }";

// Accessible name of the whole graphic
pub const SCENE_TITLE: &str = "Animated neural network that responds to mouse movement";

#[inline]
pub fn aura_offscreen_vec2() -> Vec2 {
    Vec2::new(AURA_OFFSCREEN[0], AURA_OFFSCREEN[1])
}
