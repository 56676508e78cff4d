/// Solid color painted across the logical surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl FillColor {
    pub const BLACK: Self = Self::gray(0.0);
    pub const WHITE: Self = Self::gray(1.0);

    /// Neutral gray; `0.0` is black and `1.0` white.
    pub const fn gray(value: f32) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    pub(crate) fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Swapchain presentation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VsyncMode {
    /// FIFO presentation, one frame per display refresh.
    #[default]
    On,
    /// Prefer immediate (or mailbox) presentation when the surface offers it.
    Off,
}

/// Immutable configuration passed to the renderer at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub window_size: (u32, u32),
    /// Logical surface the fill covers; scaled into the window with letterboxing.
    pub logical_size: (u32, u32),
    pub title: String,
    pub vsync: VsyncMode,
    /// Frames the GPU may queue ahead of presentation (clamped to 1-3).
    pub frame_latency: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            window_size: (1280, 720),
            logical_size: (320, 180),
            title: "dlat".to_string(),
            vsync: VsyncMode::default(),
            frame_latency: 2,
        }
    }
}
