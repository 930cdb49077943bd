//! Indexed geometry for the panel background and text box borders

use super::vertex::PanelVertex;
use crate::foundation::math::Point;

/// Vertex and index data ready for upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions
    pub vertices: Vec<PanelVertex>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Append an axis-aligned quad as two counter-clockwise triangles
    fn push_quad(&mut self, min: Point, max: Point) {
        let base = u32::try_from(self.vertices.len()).unwrap_or(u32::MAX);
        self.vertices.extend_from_slice(&[
            PanelVertex::new(min.x, min.y),
            PanelVertex::new(max.x, min.y),
            PanelVertex::new(max.x, max.y),
            PanelVertex::new(min.x, max.y),
        ]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Raw vertex bytes as laid out for a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Background quad of `width` x `height` with its lower-left corner at `lower_left`
pub fn panel_quad(lower_left: Point, width: f32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_quad(lower_left, Point::new(lower_left.x + width, lower_left.y + height));
    mesh
}

/// Border frame around an origin-centred `width` x `height` box
///
/// Four edge quads of thickness `border_width` sit outside the box. The left
/// and right edges span the full outer height so the corners are covered.
pub fn textbox_border(width: f32, height: f32, border_width: f32) -> MeshData {
    let (hw, hh, b) = (width / 2.0, height / 2.0, border_width);
    let mut mesh = MeshData::default();

    // left, right
    mesh.push_quad(Point::new(-hw - b, -hh - b), Point::new(-hw, hh + b));
    mesh.push_quad(Point::new(hw, -hh - b), Point::new(hw + b, hh + b));
    // top, bottom
    mesh.push_quad(Point::new(-hw, hh), Point::new(hw, hh + b));
    mesh.push_quad(Point::new(-hw, -hh - b), Point::new(hw, -hh));
    mesh
}
