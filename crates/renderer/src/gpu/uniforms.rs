use bytemuck::{Pod, Zeroable};

use crate::types::FillColor;

/// Uniform block read by the fill fragment shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct FillUniforms {
    pub color: [f32; 4],
}

impl FillUniforms {
    pub fn new(fill: FillColor) -> Self {
        Self {
            color: fill.to_rgba(),
        }
    }
}
