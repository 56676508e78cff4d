//! GPU side of the render sink.
//!
//! - `context` owns wgpu instance/device/surface wiring and reconfigures the
//!   swapchain when the window resizes.
//! - `pipeline` builds the fullscreen-triangle fill pipeline.
//! - `uniforms` mirrors the shader's uniform block.
//! - `state` glues them together and exposes `GpuState::paint`.

mod context;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
