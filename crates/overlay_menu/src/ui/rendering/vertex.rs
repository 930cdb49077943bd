//! Vertex types for menu rendering

use bytemuck::{Pod, Zeroable};

/// Position-only vertex for solid color geometry
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PanelVertex {
    /// Position in projection space
    pub position: [f32; 2],
}

impl PanelVertex {
    /// Create a vertex
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}
