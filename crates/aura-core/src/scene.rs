//! Static description of the neural-network scene.
//!
//! The scene is a small tree of SVG nodes. The web frontend materialises it
//! with `createElementNS`; [`SceneNode::to_markup`] serialises the same tree
//! for static embedding. Only four attributes ever change after mounting, and
//! [`frame_attributes`] lists them for a given [`ParallaxFrame`].

use crate::constants::{
    AURA_COLOR, AURA_INNER_OPACITY, AURA_RADIUS, CORE_RADIUS, GLOW_STD_DEVIATION, NODE_RADIUS,
    SCENE_CENTER, SCENE_CSS, SCENE_TITLE, SPOKE_ENDPOINTS, VIEWBOX_SIZE,
};
use crate::mapper::ParallaxFrame;
use crate::motion::{translate_style, TransitionSpec};
use std::fmt::Write as _;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const TITLE_ID: &str = "svg-title";
pub const GLOW_FILTER_ID: &str = "glow";
pub const AURA_GRADIENT_ID: &str = "focus-gradient";
pub const GUARDRAIL_GROUP_ID: &str = "aura-guardrail";
pub const CORE_GROUP_ID: &str = "aura-core";
pub const AURA_CIRCLE_ID: &str = "aura-glow";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneNode {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set (or overwrite) an attribute in place.
    pub fn set_attr(&mut self, name: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the node carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&SceneNode> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut SceneNode> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// Count nodes with the given tag in this subtree (including self).
    pub fn count_tag(&self, tag: &str) -> usize {
        let own = usize::from(self.tag == tag);
        own + self
            .children
            .iter()
            .map(|c| c.count_tag(tag))
            .sum::<usize>()
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One frame-dependent attribute, addressed by element id.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameAttribute {
    pub element_id: &'static str,
    pub name: &'static str,
    pub value: String,
}

impl FrameAttribute {
    fn new(element_id: &'static str, name: &'static str, value: String) -> Self {
        Self {
            element_id,
            name,
            value,
        }
    }
}

/// The attributes a paint has to write for `frame`.
pub fn frame_attributes(frame: &ParallaxFrame) -> [FrameAttribute; 4] {
    [
        FrameAttribute::new(
            GUARDRAIL_GROUP_ID,
            "style",
            translate_style(frame.guardrail, &TransitionSpec::GUARDRAIL),
        ),
        FrameAttribute::new(
            CORE_GROUP_ID,
            "style",
            translate_style(frame.core, &TransitionSpec::CORE),
        ),
        FrameAttribute::new(AURA_CIRCLE_ID, "cx", frame.aura.x.to_string()),
        FrameAttribute::new(AURA_CIRCLE_ID, "cy", frame.aura.y.to_string()),
    ]
}

fn defs() -> SceneNode {
    let glow = SceneNode::new("filter")
        .attr("id", GLOW_FILTER_ID)
        .child(
            SceneNode::new("feGaussianBlur")
                .attr("stdDeviation", GLOW_STD_DEVIATION)
                .attr("result", "coloredBlur"),
        )
        .child(
            SceneNode::new("feMerge")
                .child(SceneNode::new("feMergeNode").attr("in", "coloredBlur"))
                .child(SceneNode::new("feMergeNode").attr("in", "SourceGraphic")),
        );
    let gradient = SceneNode::new("radialGradient")
        .attr("id", AURA_GRADIENT_ID)
        .child(
            SceneNode::new("stop")
                .attr("offset", "0%")
                .attr("stop-color", AURA_COLOR)
                .attr("stop-opacity", AURA_INNER_OPACITY),
        )
        .child(
            SceneNode::new("stop")
                .attr("offset", "100%")
                .attr("stop-color", AURA_COLOR)
                .attr("stop-opacity", 0),
        );
    SceneNode::new("defs").child(glow).child(gradient)
}

fn centered_group(class: &'static str) -> SceneNode {
    SceneNode::new("g").attr("class", class).attr(
        "transform",
        format!("translate({SCENE_CENTER}, {SCENE_CENTER})"),
    )
}

fn spokes() -> SceneNode {
    centered_group("lines").children(SPOKE_ENDPOINTS.iter().map(|[x, y]| {
        SceneNode::new("line")
            .attr("x1", 0)
            .attr("y1", 0)
            .attr("x2", x)
            .attr("y2", y)
    }))
}

fn nodes() -> SceneNode {
    centered_group("nodes").children(SPOKE_ENDPOINTS.iter().map(|[x, y]| {
        SceneNode::new("circle")
            .attr("cx", x)
            .attr("cy", y)
            .attr("r", NODE_RADIUS)
    }))
}

fn core_group() -> SceneNode {
    SceneNode::new("g").attr("id", CORE_GROUP_ID).child(
        SceneNode::new("circle")
            .attr("cx", SCENE_CENTER)
            .attr("cy", SCENE_CENTER)
            .attr("r", CORE_RADIUS)
            .attr("class", "core")
            .attr("filter", format!("url(#{GLOW_FILTER_ID})")),
    )
}

fn aura() -> SceneNode {
    SceneNode::new("circle")
        .attr("id", AURA_CIRCLE_ID)
        .attr("r", AURA_RADIUS)
        .attr("fill", format!("url(#{AURA_GRADIENT_ID})"))
        .attr("class", "pointer-events-none")
        .attr("style", "pointer-events: none")
}

/// Build the complete `<svg>` tree, with the moving parts positioned for `frame`.
pub fn build_scene(frame: &ParallaxFrame) -> SceneNode {
    let guardrail = SceneNode::new("g")
        .attr("id", GUARDRAIL_GROUP_ID)
        .child(spokes())
        .child(nodes())
        .child(core_group());

    let mut svg = SceneNode::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("viewBox", format!("0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}"))
        .attr("class", "neural-aura")
        .attr("role", "img")
        .attr("aria-labelledby", TITLE_ID)
        .child(
            SceneNode::new("title")
                .attr("id", TITLE_ID)
                .text(SCENE_TITLE),
        )
        .child(SceneNode::new("style").text(SCENE_CSS))
        .child(defs())
        .child(guardrail)
        .child(aura());

    for update in frame_attributes(frame) {
        if let Some(node) = svg.find_by_id_mut(update.element_id) {
            node.set_attr(update.name, update.value);
        }
    }
    svg
}
