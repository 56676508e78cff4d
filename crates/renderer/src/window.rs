use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::gpu::GpuState;
use crate::runtime::FrameHook;
use crate::types::RendererConfig;

/// Window plus the GPU state painting into it.
///
/// `gpu` is declared first so the surface drops before the window it was
/// created from.
struct WindowState {
    gpu: GpuState,
    window: Arc<Window>,
}

impl WindowState {
    fn new(window: Arc<Window>, config: &RendererConfig) -> Result<Self> {
        let size = window.inner_size();
        let gpu = GpuState::new(window.as_ref(), size, config)?;
        Ok(Self { gpu, window })
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    fn size(&self) -> PhysicalSize<u32> {
        self.gpu.size()
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Runs the hook for one frame and presents its fill.
    fn render_frame<H: FrameHook>(&mut self, hook: &mut H) -> Result<FrameOutcome> {
        hook.update()?;
        match self.gpu.paint(hook.fill()) {
            Ok(()) => Ok(FrameOutcome::Presented),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.size());
                Ok(FrameOutcome::Skipped)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(anyhow!("surface out of memory")),
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("surface timeout; retrying next frame");
                Ok(FrameOutcome::Skipped)
            }
            Err(other) => {
                warn!("surface error: {other:?}; retrying next frame");
                Ok(FrameOutcome::Skipped)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameOutcome {
    Presented,
    Skipped,
}

fn is_escape(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed
        && matches!(event.logical_key, Key::Named(NamedKey::Escape))
}

/// Opens the window and drives the event loop until it closes or `hook` fails.
///
/// Redraws are requested every time the loop goes idle, so with FIFO
/// presentation the hook runs once per display refresh.
pub(crate) fn run<H: FrameHook>(config: &RendererConfig, mut hook: H) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    let window_size = PhysicalSize::new(config.window_size.0, config.window_size.1);
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(window_size)
        .build(&event_loop)
        .context("failed to create window")?;
    let window = Arc::new(window);

    let mut state = WindowState::new(window, config).context("failed to initialize renderer")?;
    info!(
        width = config.window_size.0,
        height = config.window_size.1,
        logical_width = config.logical_size.0,
        logical_height = config.logical_size.1,
        "window ready"
    );
    state.window().request_redraw();

    let mut failure: Option<anyhow::Error> = None;
    let mut frames: u64 = 0;
    let loop_result = event_loop.run(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput { event, .. } if is_escape(&event) => {
                        elwt.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(new_size);
                    }
                    WindowEvent::RedrawRequested => match state.render_frame(&mut hook) {
                        Ok(FrameOutcome::Presented) => frames += 1,
                        Ok(FrameOutcome::Skipped) => {}
                        Err(err) => {
                            error!("frame failed: {err:#}");
                            failure = Some(err);
                            elwt.exit();
                        }
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                state.window().request_redraw();
            }
            _ => {}
        }
    });

    tracing::debug!(frames, "event loop finished");
    loop_result.map_err(|err| anyhow!("event loop error: {err}"))?;
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
