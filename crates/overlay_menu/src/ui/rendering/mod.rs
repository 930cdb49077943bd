//! Menu geometry generation
//!
//! Builds the vertex and index data for the panel background and text box
//! borders. Upload and drawing are left to the [`GeometryBackend`](crate::ui::backend::GeometryBackend).

pub mod vertex;
pub mod mesh;

pub use vertex::PanelVertex;
pub use mesh::{MeshData, panel_quad, textbox_border};
