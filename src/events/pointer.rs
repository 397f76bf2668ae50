use crate::constants::POINTER_MOVE_EVENT;
use crate::dom;
use crate::input;
use aura_core::{PointerSample, PointerSource};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer movement anywhere over the browser window.
#[derive(Clone)]
pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl PointerSource for WindowPointerSource {
    // Removes itself from the window when dropped.
    type Subscription = EventListener;

    fn subscribe(&self, mut handler: Box<dyn FnMut(PointerSample)>) -> EventListener {
        let window = self.window.clone();
        EventListener::new(
            &self.window,
            POINTER_MOVE_EVENT,
            move |event: &web::Event| {
                let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let (inner_w, inner_h) = dom::viewport_size(&window);
                match input::sample_from_client(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    inner_w,
                    inner_h,
                ) {
                    Ok(sample) => handler(sample),
                    Err(e) => log::debug!("[pointer] skipped sample: {}", e),
                }
            },
        )
    }
}
