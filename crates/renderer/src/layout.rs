/// Region of the surface, in physical pixels, that the logical screen maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Scales `logical` uniformly into `surface`, centered, leaving black bars on
/// the axis with spare room.
pub fn letterbox(surface: (u32, u32), logical: (u32, u32)) -> Viewport {
    let (surface_w, surface_h) = (surface.0 as f32, surface.1 as f32);
    let (logical_w, logical_h) = (logical.0 as f32, logical.1 as f32);
    if surface_w <= 0.0 || surface_h <= 0.0 || logical_w <= 0.0 || logical_h <= 0.0 {
        return Viewport {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
    }

    let scale = (surface_w / logical_w).min(surface_h / logical_h);
    let width = logical_w * scale;
    let height = logical_h * scale;
    Viewport {
        x: ((surface_w - width) / 2.0).floor(),
        y: ((surface_h - height) / 2.0).floor(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_aspect_fills_surface() {
        let viewport = letterbox((1280, 720), (320, 180));
        assert_eq!(
            viewport,
            Viewport {
                x: 0.0,
                y: 0.0,
                width: 1280.0,
                height: 720.0,
            }
        );
    }

    #[test]
    fn taller_surface_gets_horizontal_bars() {
        let viewport = letterbox((1280, 1024), (320, 180));
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.height, 720.0);
        assert_eq!(viewport.x, 0.0);
        assert_eq!(viewport.y, 152.0);
    }

    #[test]
    fn wider_surface_gets_vertical_bars() {
        let viewport = letterbox((2560, 720), (320, 180));
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.x, 640.0);
        assert_eq!(viewport.y, 0.0);
    }

    #[test]
    fn degenerate_sizes_yield_empty_viewport() {
        assert!(letterbox((0, 720), (320, 180)).is_empty());
        assert!(letterbox((1280, 720), (0, 180)).is_empty());
    }
}
