//! In-memory backend with fixed glyph metrics
//!
//! Nothing is rasterized: text objects measure themselves with a fixed
//! advance per character, and draws are appended to shared logs that tools
//! and tests can inspect after the fact.

use super::{Font, FontLoader, GeometryBackend, MeshHandle, TextHandle};
use crate::config::FontConfig;
use crate::foundation::math::{Mat4, Point, Vec2, Vec4};
use crate::ui::geometry::{BoundingBox, WindowSize};
use crate::ui::rendering::PanelVertex;
use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Errors raised by the headless backend on request
#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    /// Font loading was configured to fail
    #[error("Font not available: {0}")]
    FontUnavailable(String),

    /// Geometry upload was configured to fail
    #[error("Geometry upload rejected after {0} uploads")]
    UploadRejected(usize),
}

/// One recorded text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Visible portion of the string
    pub text: String,
    /// Text position at draw time
    pub position: Point,
    /// Text scale at draw time
    pub scale: f32,
}

/// Shared log of text draws, in draw order
pub type TextLog = Rc<RefCell<Vec<TextDraw>>>;

/// Font loader producing [`HeadlessFont`]s
#[derive(Debug, Clone, Default)]
pub struct HeadlessFontLoader {
    /// Reject every load when set
    pub fail: bool,
    log: TextLog,
}

impl HeadlessFontLoader {
    /// Loader whose fonts report draws into `log`
    pub fn with_log(log: TextLog) -> Self {
        Self { fail: false, log }
    }

    /// Loader that always fails
    pub fn failing() -> Self {
        Self { fail: true, log: TextLog::default() }
    }
}

impl FontLoader for HeadlessFontLoader {
    type Font = HeadlessFont;

    fn load_font(&self, config: &FontConfig) -> Result<HeadlessFont, Box<dyn std::error::Error>> {
        if self.fail {
            return Err(Box::new(HeadlessError::FontUnavailable(config.path.display().to_string())));
        }
        #[allow(clippy::cast_precision_loss)]
        let line_height = config.scale as f32;
        Ok(HeadlessFont {
            glyphs: config.first_glyph..=config.last_glyph,
            advance: line_height / 2.0,
            line_height,
            window: WindowSize::new(0.0, 0.0),
            log: Rc::clone(&self.log),
        })
    }
}

/// Monospaced font: every glyph advances half the line height
#[derive(Debug, Clone)]
pub struct HeadlessFont {
    glyphs: RangeInclusive<u32>,
    advance: f32,
    line_height: f32,
    window: WindowSize,
    log: TextLog,
}

impl HeadlessFont {
    /// Window size last reported by the panel
    pub const fn window(&self) -> WindowSize {
        self.window
    }
}

impl Font for HeadlessFont {
    type Text = HeadlessText;

    fn load_text(&self) -> HeadlessText {
        HeadlessText {
            string: String::new(),
            position: Point::origin(),
            scale: 1.0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            visible_runes: 0,
            glyphs: self.glyphs.clone(),
            advance: self.advance,
            line_height: self.line_height,
            log: Rc::clone(&self.log),
        }
    }

    fn resize_window(&mut self, width: f32, height: f32) {
        self.window = WindowSize::new(width, height);
    }
}

/// Text object measured with fixed metrics
#[derive(Debug, Clone)]
pub struct HeadlessText {
    string: String,
    position: Point,
    scale: f32,
    color: Vec4,
    visible_runes: usize,
    glyphs: RangeInclusive<u32>,
    advance: f32,
    line_height: f32,
    log: TextLog,
}

impl HeadlessText {
    /// Current color
    pub const fn color(&self) -> Vec4 {
        self.color
    }

    /// The portion of the string that would be drawn
    pub fn visible_string(&self) -> String {
        self.string.chars().take(self.visible_runes).collect()
    }
}

impl TextHandle for HeadlessText {
    fn set_string(&mut self, text: &str) {
        self.string = text.to_string();
        self.visible_runes = self.string.chars().count();
    }

    fn string(&self) -> &str {
        &self.string
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    fn set_visible_runes(&mut self, count: usize) {
        self.visible_runes = count;
    }

    fn bounding_box(&self) -> BoundingBox {
        #[allow(clippy::cast_precision_loss)]
        let width = self.string.chars().count() as f32 * self.advance * self.scale;
        BoundingBox::centered(self.position, width, self.line_height * self.scale)
    }

    fn has_glyph(&self, c: char) -> bool {
        self.glyphs.contains(&u32::from(c))
    }

    fn draw(&mut self) {
        self.log.borrow_mut().push(TextDraw {
            text: self.visible_string(),
            position: self.position,
            scale: self.scale,
        });
    }
}

/// One recorded geometry draw
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDraw {
    /// Mesh drawn
    pub mesh: MeshHandle,
    /// Projection-space offset
    pub offset: Vec2,
    /// Fill color
    pub color: Vec4,
}

/// Everything the headless geometry backend has been asked to do
#[derive(Debug, Clone, Default)]
pub struct GeometryLog {
    /// Uploaded meshes with their vertex byte size and index count
    pub uploads: Vec<(MeshHandle, usize, usize)>,
    /// Draw calls in order
    pub draws: Vec<GeometryDraw>,
    /// Released meshes in order
    pub released: Vec<MeshHandle>,
}

/// Geometry backend that records calls instead of touching a GPU
#[derive(Debug, Clone, Default)]
pub struct HeadlessGeometry {
    log: Rc<RefCell<GeometryLog>>,
    next_id: u64,
    /// Reject uploads once this many have succeeded
    pub upload_limit: Option<usize>,
}

impl HeadlessGeometry {
    /// Backend recording into a shared log
    pub fn with_log(log: Rc<RefCell<GeometryLog>>) -> Self {
        Self { log, next_id: 0, upload_limit: None }
    }

    /// Reject uploads once `limit` have succeeded
    #[must_use]
    pub const fn with_upload_limit(mut self, limit: usize) -> Self {
        self.upload_limit = Some(limit);
        self
    }

    /// Shared handle to the call log
    pub fn log(&self) -> Rc<RefCell<GeometryLog>> {
        Rc::clone(&self.log)
    }
}

impl GeometryBackend for HeadlessGeometry {
    fn upload_geometry(
        &mut self,
        vertices: &[PanelVertex],
        indices: &[u32],
    ) -> Result<MeshHandle, Box<dyn std::error::Error>> {
        let mut log = self.log.borrow_mut();
        if self.upload_limit.is_some_and(|limit| log.uploads.len() >= limit) {
            return Err(Box::new(HeadlessError::UploadRejected(log.uploads.len())));
        }
        let handle = MeshHandle(self.next_id);
        self.next_id += 1;
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        log.uploads.push((handle, bytes.len(), indices.len()));
        Ok(handle)
    }

    fn draw_indexed(&mut self, mesh: MeshHandle, _projection: &Mat4, offset: Vec2, color: Vec4) {
        self.log.borrow_mut().draws.push(GeometryDraw { mesh, offset, color });
    }

    fn release(&mut self, mesh: MeshHandle) {
        self.log.borrow_mut().released.push(mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> HeadlessFont {
        let config = FontConfig { scale: 20, ..FontConfig::default() };
        HeadlessFontLoader::default().load_font(&config).unwrap()
    }

    #[test]
    fn test_text_measures_centered_box() {
        let mut text = font().load_text();
        text.set_string("abcd");
        text.set_position(10.0, 0.0);

        let bounds = text.bounding_box();
        assert_eq!(bounds.lower_left, Point::new(-10.0, -10.0));
        assert_eq!(bounds.upper_right, Point::new(30.0, 10.0));

        text.set_scale(2.0);
        assert_eq!(text.bounding_box().width(), 80.0);
    }

    #[test]
    fn test_glyph_range() {
        let text = font().load_text();
        assert!(text.has_glyph('a'));
        assert!(text.has_glyph(' '));
        assert!(!text.has_glyph('\u{e9}'));
        assert!(!text.has_glyph('\n'));
    }

    #[test]
    fn test_visible_runes_reset_on_set_string() {
        let mut text = font().load_text();
        text.set_string("abc|");
        text.set_visible_runes(3);
        assert_eq!(text.visible_string(), "abc");

        text.set_string("ab|");
        assert_eq!(text.visible_string(), "ab|");
    }

    #[test]
    fn test_failing_loader() {
        let result = HeadlessFontLoader::failing().load_font(&FontConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_limit() {
        let mut geometry = HeadlessGeometry::default().with_upload_limit(1);
        let vertices = [PanelVertex::new(0.0, 0.0)];
        assert!(geometry.upload_geometry(&vertices, &[0]).is_ok());
        assert!(geometry.upload_geometry(&vertices, &[0]).is_err());
        assert_eq!(geometry.log().borrow().uploads, vec![(MeshHandle(0), 8, 1)]);
    }
}
