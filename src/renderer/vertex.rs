//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// `@location(0)` position, `@location(1)` color
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout the host's pipeline binds the tessellated scene with
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Raw bytes of a triangle list, ready for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for scene elements
pub mod colors {
    pub const PILLAR: [f32; 4] = [0.75, 0.72, 0.65, 1.0];
    pub const CLOCK_HAND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const ROCKET: [f32; 4] = [0.85, 0.85, 0.9, 1.0];
    pub const FLAME: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
    /// Marker line above the rocket's center clock
    pub const CENTER_MARK: [f32; 4] = [0.145, 0.6, 0.165, 1.0];
}
