//! View-side state shared between the pointer sampler and the painter.
//!
//! These types avoid referencing platform-specific APIs so the sampling logic
//! can be exercised on the host. The web frontend plugs in a window-backed
//! [`PointerSource`]; tests plug in an in-memory one.

use crate::mapper::{map_pointer, ParallaxFrame, ParallaxTuning, PointerSample};
use std::cell::Cell;
use std::rc::Rc;

/// Latest frame for one mounted view. Clones share the same cell.
///
/// Written only by the sampler, read only by the painter; single-threaded,
/// last write wins.
#[derive(Clone, Debug, Default)]
pub struct ParallaxState {
    frame: Rc<Cell<ParallaxFrame>>,
}

impl ParallaxState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frame(&self) -> ParallaxFrame {
        self.frame.get()
    }

    /// Replace the whole frame.
    #[inline]
    pub fn publish(&self, frame: ParallaxFrame) {
        self.frame.set(frame);
    }

    /// Map `sample` and publish the result, returning it.
    pub fn apply(&self, sample: &PointerSample, tuning: &ParallaxTuning) -> ParallaxFrame {
        let frame = map_pointer(sample, tuning);
        self.publish(frame);
        frame
    }
}

/// Something that delivers pointer-move samples.
///
/// `subscribe` hands back a guard; the handler stays registered exactly as
/// long as the guard is alive.
pub trait PointerSource {
    type Subscription;

    fn subscribe(&self, handler: Box<dyn FnMut(PointerSample)>) -> Self::Subscription;
}

/// Keeps a [`ParallaxState`] in sync with a pointer source.
///
/// Dropping the sampler drops the subscription, which unregisters the handler.
pub struct Sampler<G> {
    state: ParallaxState,
    _subscription: G,
}

impl<G> Sampler<G> {
    /// Subscribe to `source`; each sample is mapped with `tuning`, published to
    /// `state`, then passed to `on_frame`.
    pub fn attach<S>(
        source: &S,
        state: ParallaxState,
        tuning: ParallaxTuning,
        mut on_frame: impl FnMut(ParallaxFrame) + 'static,
    ) -> Self
    where
        S: PointerSource<Subscription = G>,
    {
        let handler_state = state.clone();
        let subscription = source.subscribe(Box::new(move |sample: PointerSample| {
            let frame = handler_state.apply(&sample, &tuning);
            on_frame(frame);
        }));
        log::debug!("[pointer] sampler attached");
        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> &ParallaxState {
        &self.state
    }
}

impl<G> Drop for Sampler<G> {
    fn drop(&mut self) {
        log::debug!("[pointer] sampler detached");
    }
}
