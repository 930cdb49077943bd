//! Menu panel
//!
//! Owns the widgets, the shared font and the window state, and routes host
//! events to every child.

use super::backend::{Font, FontLoader, GeometryBackend, MeshHandle};
use super::error::MenuError;
use super::geometry::{flip_y, to_screen_space, WindowSize};
use super::interact::Interactable;
use super::rendering::panel_quad;
use super::widgets::{Label, TextBox};
use crate::config::MenuConfig;
use crate::foundation::math::{centered_ortho, Mat4, Point, Vec2, Vec4};
use crate::input::{Key, KeyModifiers, MouseButton};
use std::time::{Duration, Instant};

/// Index of a label within its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(pub usize);

/// Index of a text box within its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextBoxId(pub usize);

/// Translucent menu panel with labels and text boxes
///
/// Children are drawn and receive events in the order they were added. Every
/// child sees every event; a hit on one widget does not stop dispatch to
/// widgets added after it. While hidden, dispatch and drawing do nothing.
///
/// Dropping the panel releases all uploaded geometry through the backend.
pub struct Panel<F: Font, G: GeometryBackend> {
    visible: bool,
    toggle_key: Key,
    width: f32,
    height: f32,
    lower_left: Point,
    background_color: Vec4,
    text_scale_rate: f32,
    blink_interval: Duration,
    window: WindowSize,
    projection: Mat4,
    font: F,
    graphics: G,
    background: MeshHandle,
    labels: Vec<Label<F::Text>>,
    textboxes: Vec<TextBox<F::Text>>,
}

impl<F: Font, G: GeometryBackend> Panel<F, G> {
    /// Load the font and upload the background geometry
    ///
    /// The panel starts hidden and centred on the projection origin.
    ///
    /// # Errors
    /// [`MenuError::ResourceLoad`] if the font or the background geometry
    /// cannot be loaded, [`MenuError::InvalidConfig`] for unusable settings.
    pub fn load<L>(config: &MenuConfig, loader: &L, mut graphics: G) -> Result<Self, MenuError>
    where
        L: FontLoader<Font = F>,
    {
        config.validate().map_err(MenuError::InvalidConfig)?;

        let font = loader
            .load_font(&config.font)
            .map_err(|e| MenuError::resource(format!("font {}", config.font.path.display()), e))?;

        let lower_left = Point::new(-config.width / 2.0, -config.height / 2.0);
        let quad = panel_quad(lower_left, config.width, config.height);
        let background = graphics
            .upload_geometry(&quad.vertices, &quad.indices)
            .map_err(|e| MenuError::resource("panel background geometry", e))?;

        let mut panel = Self {
            visible: false,
            toggle_key: config.toggle_key,
            width: config.width,
            height: config.height,
            lower_left,
            background_color: config.background(),
            text_scale_rate: config.text_scale_rate,
            blink_interval: config.cursor_blink_interval(),
            window: config.window,
            projection: Mat4::identity(),
            font,
            graphics,
            background,
            labels: Vec::new(),
            textboxes: Vec::new(),
        };
        panel.resize_window(config.window.width, config.window.height);

        log::debug!(
            "Loaded menu panel {}x{} for window {}x{}",
            panel.width, panel.height, panel.window.width, panel.window.height
        );
        Ok(panel)
    }

    /// Add a label at the origin with base scale and black text
    pub fn add_label(&mut self, content: &str) -> LabelId {
        let id = LabelId(self.labels.len());
        self.labels.push(Label::new(self.font.load_text(), content));
        id
    }

    /// Add a text box of `width` x `height` with a `border_width` frame
    ///
    /// # Errors
    /// [`MenuError::ResourceLoad`] if the border geometry cannot be uploaded.
    pub fn add_textbox(
        &mut self,
        content: &str,
        width: f32,
        height: f32,
        border_width: f32,
    ) -> Result<TextBoxId, MenuError> {
        let mut textbox = TextBox::new(self.font.load_text(), content, width, height, border_width);
        textbox.set_blink_interval(self.blink_interval);

        let border = textbox.border_geometry();
        let mesh = self
            .graphics
            .upload_geometry(&border.vertices, &border.indices)
            .map_err(|e| MenuError::resource("text box border geometry", e))?;
        textbox.set_border_mesh(mesh);

        let id = TextBoxId(self.textboxes.len());
        self.textboxes.push(textbox);
        Ok(id)
    }

    /// Attach a drop shadow to a label; returns `false` for an unknown id
    pub fn attach_label_shadow(&mut self, id: LabelId, offset: f32, color: Vec4) -> bool {
        let text = self.font.load_text();
        match self.labels.get_mut(id.0) {
            Some(label) => {
                label.attach_shadow(text, offset, color);
                true
            }
            None => false,
        }
    }

    /// Get label reference
    pub fn label(&self, id: LabelId) -> Option<&Label<F::Text>> {
        self.labels.get(id.0)
    }

    /// Get label mutable reference
    pub fn label_mut(&mut self, id: LabelId) -> Option<&mut Label<F::Text>> {
        self.labels.get_mut(id.0)
    }

    /// Get text box reference
    pub fn textbox(&self, id: TextBoxId) -> Option<&TextBox<F::Text>> {
        self.textboxes.get(id.0)
    }

    /// Get text box mutable reference
    pub fn textbox_mut(&mut self, id: TextBoxId) -> Option<&mut TextBox<F::Text>> {
        self.textboxes.get_mut(id.0)
    }

    /// All labels in draw order
    pub fn labels(&self) -> &[Label<F::Text>] {
        &self.labels
    }

    /// All text boxes in draw order
    pub fn textboxes(&self) -> &[TextBox<F::Text>] {
        &self.textboxes
    }

    /// Whether the panel is shown
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Key that toggles the panel
    pub const fn toggle_key(&self) -> Key {
        self.toggle_key
    }

    /// Per-frame scale increment for hover-grow callbacks
    pub const fn text_scale_rate(&self) -> f32 {
        self.text_scale_rate
    }

    /// Panel width and height
    pub const fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Current window size
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// Current orthographic projection
    pub const fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Shared font
    pub const fn font(&self) -> &F {
        &self.font
    }

    /// Geometry backend
    pub const fn graphics(&self) -> &G {
        &self.graphics
    }

    /// Lower-left corner of the panel in window space
    pub fn screen_origin(&self) -> Point {
        to_screen_space(self.lower_left, self.window)
    }

    /// Show or hide the panel
    ///
    /// Labels return to their base scale so hover growth does not survive a
    /// toggle. Text boxes keep their edit state.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        for label in &mut self.labels {
            label.reset_scale();
        }
        log::debug!("Menu {}", if self.visible { "shown" } else { "hidden" });
    }

    /// Update the window size and projection
    ///
    /// Must be called on every window resize; hit testing uses the stored
    /// size.
    pub fn resize_window(&mut self, width: f32, height: f32) {
        self.window = WindowSize::new(width, height);
        self.font.resize_window(width, height);
        self.projection = centered_ortho(width, height);
        log::debug!("Menu window resized to {width}x{height}");
    }

    /// Forward a button press at a raw window position (Y down)
    pub fn dispatch_click(&mut self, x: f64, y: f64, button: MouseButton) {
        let Some(y) = self.pointer_y(y) else {
            return;
        };
        for label in &mut self.labels {
            label.notify_pressed(x, y, button, self.window);
        }
        for textbox in &mut self.textboxes {
            textbox.notify_pressed(x, y, button, self.window);
        }
    }

    /// Forward a button release at a raw window position (Y down)
    pub fn dispatch_release(&mut self, x: f64, y: f64, button: MouseButton) {
        let Some(y) = self.pointer_y(y) else {
            return;
        };
        for label in &mut self.labels {
            label.notify_released(x, y, button, self.window);
        }
        for textbox in &mut self.textboxes {
            textbox.notify_released(x, y, button, self.window);
        }
    }

    /// Forward pointer motion at a raw window position (Y down)
    pub fn dispatch_hover(&mut self, x: f64, y: f64) {
        let Some(y) = self.pointer_y(y) else {
            return;
        };
        for label in &mut self.labels {
            label.notify_hovered(x, y, self.window);
        }
        for textbox in &mut self.textboxes {
            textbox.notify_hovered(x, y, self.window);
        }
    }

    /// Route a key press
    ///
    /// While any text box is editing, keys go to the editing boxes only. The
    /// toggle key otherwise shows or hides the panel. Returns whether the key
    /// was used.
    pub fn dispatch_key(&mut self, key: Key, mods: KeyModifiers) -> bool {
        if self.visible && self.textboxes.iter().any(TextBox::is_editing) {
            for textbox in self.textboxes.iter_mut().filter(|t| t.is_editing()) {
                textbox.key_press(key, mods.shift());
            }
            return true;
        }
        if key == self.toggle_key {
            self.toggle_visibility();
            return true;
        }
        false
    }

    /// Draw the panel; returns whether it is visible
    pub fn draw(&mut self) -> bool {
        self.draw_at(Instant::now())
    }

    /// Draw the panel as of `now`; returns whether it is visible
    ///
    /// Draws the background, every label, every text box, then runs the
    /// not-hovered callback of each label that is not hovered.
    pub fn draw_at(&mut self, now: Instant) -> bool {
        if !self.visible {
            return false;
        }
        self.graphics
            .draw_indexed(self.background, &self.projection, Vec2::zeros(), self.background_color);
        for label in &mut self.labels {
            label.draw();
        }
        for textbox in &mut self.textboxes {
            textbox.draw_at(now, &mut self.graphics, &self.projection);
        }
        for label in self.labels.iter_mut().filter(|l| !l.is_hovered()) {
            label.fire_not_hover();
        }
        true
    }

    /// Flipped pointer Y, or `None` while hidden
    fn pointer_y(&self, raw_y: f64) -> Option<f64> {
        if !self.visible {
            log::trace!("Menu hidden, ignoring pointer event");
            return None;
        }
        Some(flip_y(raw_y, self.window.height))
    }
}

impl<F: Font, G: GeometryBackend> Drop for Panel<F, G> {
    fn drop(&mut self) {
        self.graphics.release(self.background);
        for mesh in self.textboxes.iter().filter_map(TextBox::border_mesh) {
            self.graphics.release(mesh);
        }
    }
}
