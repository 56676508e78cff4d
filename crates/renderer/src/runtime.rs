use anyhow::Result;

use crate::types::FillColor;

/// Per-frame callbacks driven by the window loop.
///
/// The loop calls [`FrameHook::update`] and then paints [`FrameHook::fill`]
/// once for every redraw, in that order.
pub trait FrameHook {
    /// Advances application state for the frame about to be drawn.
    ///
    /// Returning an error ends the event loop and surfaces the error from
    /// [`crate::Renderer::run`].
    fn update(&mut self) -> Result<()>;

    /// Color to paint this frame.
    fn fill(&self) -> FillColor;
}
