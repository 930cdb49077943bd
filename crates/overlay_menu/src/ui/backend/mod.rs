//! Menu Render Backend Traits
//!
//! Defines the interface between the menu widgets and the text / geometry
//! rendering collaborators, keeping the widgets independent of any graphics
//! API or glyph library.

pub mod headless;

use crate::config::FontConfig;
use crate::foundation::math::{Mat4, Point, Vec2, Vec4};
use crate::ui::geometry::BoundingBox;
use crate::ui::rendering::PanelVertex;

/// Handle to geometry uploaded to the GPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Loads fonts for the menu
pub trait FontLoader {
    /// Font type produced by this loader
    type Font: Font;

    /// Load a font and rasterize the configured glyph range
    fn load_font(&self, config: &FontConfig) -> Result<Self::Font, Box<dyn std::error::Error>>;
}

/// A loaded font shared by every text object of a panel
pub trait Font {
    /// Text object type created from this font
    type Text: TextHandle;

    /// Create a new, empty text object using this font
    fn load_text(&self) -> Self::Text;

    /// Update the window size used by the font's text projection
    fn resize_window(&mut self, width: f32, height: f32);
}

/// A single renderable string
///
/// Positions are in projection space. Setting the string re-centres the
/// text, so callers re-apply the position afterwards to keep it anchored.
pub trait TextHandle {
    /// Replace the rendered string
    fn set_string(&mut self, text: &str);

    /// Currently rendered string
    fn string(&self) -> &str;

    /// Move the text centre to `(x, y)`
    fn set_position(&mut self, x: f32, y: f32);

    /// Last position set
    fn position(&self) -> Point;

    /// Set the render scale
    fn set_scale(&mut self, scale: f32);

    /// Current render scale
    fn scale(&self) -> f32;

    /// Set the text color (RGBA)
    fn set_color(&mut self, color: Vec4);

    /// Limit drawing to the first `count` characters
    fn set_visible_runes(&mut self, count: usize);

    /// Bounding box of the rendered string in projection space
    fn bounding_box(&self) -> BoundingBox;

    /// Whether the font can render `c`
    fn has_glyph(&self, c: char) -> bool;

    /// Draw the text
    fn draw(&mut self);
}

/// Backend-agnostic indexed geometry interface
pub trait GeometryBackend {
    /// Upload vertices and triangle indices
    ///
    /// Fails when buffers cannot be created or the shader program backing the
    /// geometry does not load.
    fn upload_geometry(
        &mut self,
        vertices: &[PanelVertex],
        indices: &[u32],
    ) -> Result<MeshHandle, Box<dyn std::error::Error>>;

    /// Bind and draw uploaded geometry as indexed triangles
    ///
    /// # Arguments
    /// * `projection` - Orthographic projection for the current window
    /// * `offset` - Translation applied in projection space
    /// * `color` - Fill color (RGBA)
    fn draw_indexed(&mut self, mesh: MeshHandle, projection: &Mat4, offset: Vec2, color: Vec4);

    /// Release uploaded geometry
    fn release(&mut self, mesh: MeshHandle);
}
