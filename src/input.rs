use aura_core::{PointerSample, Viewport, ViewportError};

// ---------------- Pointer helpers ----------------
/// Build a sample from raw event coordinates and `window.innerWidth/innerHeight`.
///
/// A missing or zero-sized viewport yields an error instead of a sample, so
/// callers never publish NaN or infinite coordinates.
#[inline]
pub fn sample_from_client(
    client_x: f64,
    client_y: f64,
    inner_width: Option<f64>,
    inner_height: Option<f64>,
) -> Result<PointerSample, ViewportError> {
    let viewport = Viewport::new(
        inner_width.unwrap_or(0.0) as f32,
        inner_height.unwrap_or(0.0) as f32,
    )?;
    Ok(PointerSample::new(
        client_x as f32,
        client_y as f32,
        viewport,
    ))
}
