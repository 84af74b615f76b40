//! Vertex format and mesh buffers for assembled geometry.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use nib_core::{Color, math::PackedVec2};
use static_assertions::const_assert_eq;

/// Vertex for assembled 2D geometry.
///
/// Position plus a baked RGBA color, ready for standard alpha blending. No
/// normals or path-distance attributes: dashes and stroke offsets are
/// resolved on the CPU before assembly, so the GPU only ever sees final
/// positions.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in 2D space
    pub position: PackedVec2,
    /// RGBA color with the layer opacity baked into alpha
    pub color: Color,
}

const_assert_eq!(std::mem::size_of::<MeshVertex>(), 24);

impl MeshVertex {
    /// Create a new vertex.
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.into(),
            color,
        }
    }

    /// Get the WGPU vertex buffer layout.
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Output from mesh assembly: vertices and triangle indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<MeshVertex>,
    /// Index data (triangles)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with given vertices and indices.
    pub fn from_data(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
