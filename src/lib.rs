#![cfg(target_arch = "wasm32")]
use aura_core::ParallaxTuning;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod view;

use constants::DEFAULT_ROOT_ID;
use view::AuraView;

thread_local! {
    // At most one graphic per page.
    static MOUNTED: RefCell<Option<AuraView>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aura-web starting");

    if let Err(e) = mount_into(DEFAULT_ROOT_ID) {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Mount the graphic into the element with `root_id`, replacing any view that
/// is already mounted.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    mount_into(root_id).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

/// Tear down the mounted graphic, if any.
#[wasm_bindgen]
pub fn unmount() {
    // drop outside the borrow so teardown never observes MOUNTED borrowed
    let view = MOUNTED.with(|m| m.borrow_mut().take());
    drop(view);
}

fn mount_into(root_id: &str) -> anyhow::Result<()> {
    unmount();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::resolve_root(&document, root_id)?;
    let view = AuraView::mount(window, &document, &root, ParallaxTuning::default())?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(view));
    Ok(())
}
