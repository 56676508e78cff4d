//! Render sink and frame loop host for `dlat`.
//!
//! The crate opens a `winit` window, paints it with a single solid color
//! through `wgpu`, and calls back into the application once per frame:
//!
//! ```text
//!   Renderer::run ──▶ winit event loop ──▶ RedrawRequested
//!                                              │
//!                          FrameHook::update ◀─┤
//!                          FrameHook::fill   ◀─┘──▶ GpuState::paint ──▶ present
//! ```
//!
//! The painted area is a fixed logical screen (320×180 by default) scaled into
//! the window with its aspect ratio preserved; the rest of the window stays
//! black.

mod gpu;
pub mod layout;
mod runtime;
mod types;
mod window;

use anyhow::Result;

pub use layout::{letterbox, Viewport};
pub use runtime::FrameHook;
pub use types::{FillColor, RendererConfig, VsyncMode};

/// Entry point that owns the window configuration.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Opens the window and drives `hook` until the window is closed.
    ///
    /// Blocks the calling thread, which must be the main thread on platforms
    /// that require it.
    pub fn run<H: FrameHook>(&mut self, hook: H) -> Result<()> {
        window::run(&self.config, hook)
    }
}
