use aura_core::{SceneNode, SVG_NS};
use web_sys as web;

/// `window.innerWidth/innerHeight`, when the browser reports them.
#[inline]
pub fn viewport_size(window: &web::Window) -> (Option<f64>, Option<f64>) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    (w, h)
}

/// Element with `root_id`, or `<body>` when the page has no such element.
pub fn resolve_root(document: &web::Document, root_id: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(root_id) {
        return Ok(el);
    }
    log::warn!("[mount] missing #{}; falling back to <body>", root_id);
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("no #{} and no <body>", root_id))
}

pub fn create_svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

/// Turn a scene tree into live SVG elements.
///
/// Every element carrying an `id` is also pushed onto `by_id` so callers can
/// keep handles to the parts they animate.
pub fn materialize(
    document: &web::Document,
    node: &SceneNode,
    by_id: &mut Vec<(String, web::Element)>,
) -> anyhow::Result<web::Element> {
    let el = create_svg_element(document, node.tag)?;
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)
            .map_err(|e| anyhow::anyhow!("set {}={:?}: {:?}", name, value, e))?;
    }
    if let Some(text) = &node.text {
        el.set_text_content(Some(text.as_str()));
    }
    for child in &node.children {
        let child_el = materialize(document, child, by_id)?;
        el.append_child(&child_el)
            .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", child.tag, e))?;
    }
    if let Some(id) = node.get_attr("id") {
        by_id.push((id.to_string(), el.clone()));
    }
    Ok(el)
}

pub fn element_by_id(by_id: &[(String, web::Element)], id: &str) -> anyhow::Result<web::Element> {
    by_id
        .iter()
        .find(|(k, _)| k == id)
        .map(|(_, el)| el.clone())
        .ok_or_else(|| anyhow::anyhow!("scene has no #{}", id))
}
