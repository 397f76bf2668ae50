use crate::constants::{ROOT_CLASS, ROOT_STYLE, SVG_LAYOUT_STYLE};
use crate::dom;
use crate::events::WindowPointerSource;
use aura_core::{
    build_scene, frame_attributes, ParallaxState, ParallaxTuning, Sampler, AURA_CIRCLE_ID,
    CORE_GROUP_ID, GUARDRAIL_GROUP_ID,
};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Writes the latest frame into the three moving elements, at most once per
/// animation frame.
struct Painter {
    state: ParallaxState,
    guardrail: web::Element,
    core: web::Element,
    aura: web::Element,
    pending: RefCell<Option<AnimationFrame>>,
}

impl Painter {
    fn target(&self, element_id: &str) -> Option<&web::Element> {
        match element_id {
            GUARDRAIL_GROUP_ID => Some(&self.guardrail),
            CORE_GROUP_ID => Some(&self.core),
            AURA_CIRCLE_ID => Some(&self.aura),
            _ => None,
        }
    }

    fn paint(&self) {
        let frame = self.state.frame();
        log::trace!(
            "[paint] aura=({:.1},{:.1}) guardrail=({:.2},{:.2}) core=({:.2},{:.2})",
            frame.aura.x,
            frame.aura.y,
            frame.guardrail.x,
            frame.guardrail.y,
            frame.core.x,
            frame.core.y
        );
        for update in frame_attributes(&frame) {
            if let Some(el) = self.target(update.element_id) {
                _ = el.set_attribute(update.name, &update.value);
            }
        }
    }

    // Samples that land while a paint is pending only overwrite the state.
    fn queue_paint(self: &Rc<Self>) {
        if self.pending.borrow().is_some() {
            return;
        }
        let painter = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            painter.pending.borrow_mut().take();
            painter.paint();
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// One mounted graphic. Dropping it removes the pointer listener, cancels any
/// pending paint and detaches the svg.
pub struct AuraView {
    root: web::Element,
    root_style: Option<String>,
    svg: web::Element,
    painter: Rc<Painter>,
    sampler: Option<Sampler<EventListener>>,
}

impl AuraView {
    pub fn mount(
        window: web::Window,
        document: &web::Document,
        root: &web::Element,
        tuning: ParallaxTuning,
    ) -> anyhow::Result<Self> {
        tuning.validate()?;

        let state = ParallaxState::new();
        let scene = build_scene(&state.frame());
        let mut by_id = Vec::new();
        let svg = dom::materialize(document, &scene, &mut by_id)?;
        _ = svg.set_attribute("style", SVG_LAYOUT_STYLE);

        let painter = Rc::new(Painter {
            state: state.clone(),
            guardrail: dom::element_by_id(&by_id, GUARDRAIL_GROUP_ID)?,
            core: dom::element_by_id(&by_id, CORE_GROUP_ID)?,
            aura: dom::element_by_id(&by_id, AURA_CIRCLE_ID)?,
            pending: RefCell::new(None),
        });

        root.append_child(&svg)
            .map_err(|e| anyhow::anyhow!("append svg: {:?}", e))?;
        let root_style = root.get_attribute("style");
        _ = root.class_list().add_1(ROOT_CLASS);
        _ = root.set_attribute("style", ROOT_STYLE);

        let source = WindowPointerSource::new(window);
        let painter_for_samples = Rc::clone(&painter);
        let sampler = Sampler::attach(&source, state, tuning, move |_frame| {
            painter_for_samples.queue_paint();
        });

        log::info!("[mount] neural aura mounted");
        Ok(Self {
            root: root.clone(),
            root_style,
            svg,
            painter,
            sampler: Some(sampler),
        })
    }
}

impl Drop for AuraView {
    fn drop(&mut self) {
        // listener first, so nothing queues a paint after the cancel below
        self.sampler.take();
        self.painter.cancel();
        self.svg.remove();
        _ = self.root.class_list().remove_1(ROOT_CLASS);
        _ = match &self.root_style {
            Some(style) => self.root.set_attribute("style", style),
            None => self.root.remove_attribute("style"),
        };
        log::info!("[mount] neural aura torn down");
    }
}
