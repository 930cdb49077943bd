//! Text box widget - bordered, editable single-line text

use crate::foundation::math::{Mat4, Point, Vec2, Vec4};
use crate::input::Key;
use crate::ui::backend::{GeometryBackend, MeshHandle, TextHandle};
use crate::ui::geometry::BoundingBox;
use crate::ui::interact::{Callback, Interactable, InteractionState, PointerEvent};
use crate::ui::rendering::{textbox_border, MeshData};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Glyph appended to the rendered string as the edit cursor
pub const CURSOR_GLYPH: char = '|';

/// Default cursor blink interval
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Callback for text box click and release events
pub type TextBoxCallback<T> = Callback<TextBox<T>>;

/// Editable text field
///
/// The stored buffer never contains the cursor glyph; the rendered string is
/// always `buffer + '|'` and the bar is hidden by limiting the visible
/// character count. Clicking and releasing inside the box enters edit mode,
/// pressing anywhere outside leaves it.
pub struct TextBox<T> {
    text: T,
    buffer: String,
    max_length: Option<usize>,
    cursor_visible: bool,
    blink_interval: Duration,
    last_blink: Instant,
    is_editing: bool,
    on_click: Option<TextBoxCallback<T>>,
    on_release: Option<TextBoxCallback<T>>,
    state: InteractionState,
    width: f32,
    height: f32,
    border_width: f32,
    border_color: Vec4,
    border_mesh: Option<MeshHandle>,
}

impl<T: fmt::Debug> fmt::Debug for TextBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("buffer", &self.buffer)
            .field("max_length", &self.max_length)
            .field("is_editing", &self.is_editing)
            .field("cursor_visible", &self.cursor_visible)
            .field("state", &self.state)
            .field("size", &(self.width, self.height, self.border_width))
            .finish_non_exhaustive()
    }
}

impl<T: TextHandle> TextBox<T> {
    /// Create a text box of `width` x `height` with a `border_width` frame
    pub fn new(mut text: T, content: &str, width: f32, height: f32, border_width: f32) -> Self {
        text.set_scale(1.0);
        text.set_position(0.0, 0.0);
        text.set_color(Vec4::new(0.0, 0.0, 0.0, 1.0));
        let mut textbox = Self {
            text,
            buffer: String::new(),
            max_length: None,
            cursor_visible: false,
            blink_interval: DEFAULT_BLINK_INTERVAL,
            last_blink: Instant::now(),
            is_editing: false,
            on_click: None,
            on_release: None,
            state: InteractionState::default(),
            width,
            height,
            border_width,
            border_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            border_mesh: None,
        };
        textbox.set_text(content);
        textbox
    }

    /// Buffer contents, without the cursor glyph
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// String handed to the text renderer, cursor glyph included
    pub fn rendered_text(&self) -> &str {
        self.text.string()
    }

    /// Replace the buffer contents
    pub fn set_text(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.refresh_text();
    }

    /// Centre position in projection space
    pub fn position(&self) -> Point {
        self.text.position()
    }

    /// Move the box and its text
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.text.set_position(x, y);
    }

    /// Set the text color (RGBA)
    pub fn set_color(&mut self, color: Vec4) {
        self.text.set_color(color);
    }

    /// Set the border color (RGBA)
    pub fn set_border_color(&mut self, color: Vec4) {
        self.border_color = color;
    }

    /// Inner width, height and border thickness
    pub const fn size(&self) -> (f32, f32, f32) {
        (self.width, self.height, self.border_width)
    }

    /// Maximum buffer length in characters, if limited
    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Limit the buffer length; `None` removes the limit
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    /// Whether the box is in edit mode
    pub const fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Enter or leave edit mode
    pub fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
    }

    /// Whether the cursor bar is currently shown
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Set the cursor blink interval
    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blink_interval = interval;
    }

    /// Set the click callback
    pub fn set_on_click(&mut self, callback: impl Fn(&mut Self, PointerEvent) + 'static) {
        self.on_click = Some(Rc::new(callback));
    }

    /// Set the release callback
    pub fn set_on_release(&mut self, callback: impl Fn(&mut Self, PointerEvent) + 'static) {
        self.on_release = Some(Rc::new(callback));
    }

    /// Underlying text handle
    pub const fn text_handle(&self) -> &T {
        &self.text
    }

    /// Border geometry around the origin, ready for upload
    pub fn border_geometry(&self) -> MeshData {
        textbox_border(self.width, self.height, self.border_width)
    }

    /// Uploaded border mesh, if any
    pub const fn border_mesh(&self) -> Option<MeshHandle> {
        self.border_mesh
    }

    pub(crate) fn set_border_mesh(&mut self, mesh: MeshHandle) {
        self.border_mesh = Some(mesh);
    }

    /// Handle a key press: backspace deletes, every other key appends
    pub fn key_press(&mut self, key: Key, shift_held: bool) -> bool {
        if key == Key::BACKSPACE {
            self.backspace()
        } else {
            self.add_character(key, shift_held)
        }
    }

    /// Append the character for `key`
    ///
    /// Letter keys are lower-cased unless shift is held (see [`Key::to_char`]).
    /// Keys without a glyph in the font, and appends past the maximum
    /// length, are ignored. Returns whether the buffer changed.
    pub fn add_character(&mut self, key: Key, shift_held: bool) -> bool {
        if self.max_length.is_some_and(|max| self.buffer.chars().count() >= max) {
            log::trace!("Text box full, ignoring {key:?}");
            return false;
        }
        let Some(c) = key.to_char(shift_held).filter(|&c| self.text.has_glyph(c)) else {
            log::trace!("No glyph for {key:?}, ignoring");
            return false;
        };
        self.buffer.push(c);
        self.refresh_text();
        true
    }

    /// Delete the last character while editing
    ///
    /// Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        if !self.is_editing || self.buffer.pop().is_none() {
            return false;
        }
        self.refresh_text();
        true
    }

    /// Advance the cursor blink to `now`
    ///
    /// Toggles the bar once more than the blink interval has passed since the
    /// last toggle. Outside edit mode the bar is always hidden.
    pub fn update_cursor(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_blink) > self.blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = now;
        }
        if !self.is_editing {
            self.cursor_visible = false;
        }
        self.apply_cursor();
    }

    /// Draw the border and text, advancing the cursor blink to the current time
    pub fn draw(&mut self, backend: &mut dyn GeometryBackend, projection: &Mat4) {
        self.draw_at(Instant::now(), backend, projection);
    }

    /// Draw the border and text as of `now`
    pub fn draw_at(&mut self, now: Instant, backend: &mut dyn GeometryBackend, projection: &Mat4) {
        self.update_cursor(now);
        if let Some(mesh) = self.border_mesh {
            let position = self.text.position();
            backend.draw_indexed(mesh, projection, Vec2::new(position.x, position.y), self.border_color);
        }
        self.text.draw();
    }

    /// Push `buffer + cursor` to the renderer, keeping the current anchor
    fn refresh_text(&mut self) {
        let position = self.text.position();
        let mut rendered = String::with_capacity(self.buffer.len() + 1);
        rendered.push_str(&self.buffer);
        rendered.push(CURSOR_GLYPH);
        self.text.set_string(&rendered);
        self.text.set_position(position.x, position.y);
        self.apply_cursor();
    }

    fn apply_cursor(&mut self) {
        let runes = self.buffer.chars().count();
        self.text.set_visible_runes(if self.cursor_visible { runes + 1 } else { runes });
    }
}

impl<T: TextHandle> Interactable for TextBox<T> {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::centered(self.text.position(), self.width, self.height)
    }

    fn state(&self) -> &InteractionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    fn fire_click(&mut self, event: PointerEvent) {
        if let Some(callback) = self.on_click.clone() {
            callback(self, event);
        }
    }

    fn fire_release(&mut self, event: PointerEvent) {
        if let Some(callback) = self.on_release.clone() {
            callback(self, event);
        }
    }

    fn pressed_outside(&mut self) {
        self.is_editing = false;
    }

    fn released_after_press(&mut self) {
        self.is_editing = true;
    }
}
