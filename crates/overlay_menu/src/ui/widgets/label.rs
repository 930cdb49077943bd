//! Label widget - positioned text with an optional drop shadow

use crate::foundation::math::{Point, Vec4};
use crate::ui::backend::TextHandle;
use crate::ui::geometry::BoundingBox;
use crate::ui::interact::{Callback, Interactable, InteractionState, PointerEvent};
use std::fmt;
use std::rc::Rc;

/// Callback for label click, release and hover events
pub type LabelCallback<T> = Callback<Label<T>>;

/// Callback run once per drawn frame while a label is not hovered
pub type NotHoverCallback<T> = Rc<dyn Fn(&mut Label<T>)>;

/// The four user callbacks of a label
pub struct LabelCallbacks<T> {
    /// Press inside the label
    pub on_click: Option<LabelCallback<T>>,
    /// Release after a press inside the label
    pub on_release: Option<LabelCallback<T>>,
    /// Pointer moved over the label
    pub on_hover: Option<LabelCallback<T>>,
    /// Frame drawn without the label hovered
    pub on_not_hover: Option<NotHoverCallback<T>>,
}

impl<T> Clone for LabelCallbacks<T> {
    fn clone(&self) -> Self {
        Self {
            on_click: self.on_click.clone(),
            on_release: self.on_release.clone(),
            on_hover: self.on_hover.clone(),
            on_not_hover: self.on_not_hover.clone(),
        }
    }
}

impl<T> Default for LabelCallbacks<T> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_release: None,
            on_hover: None,
            on_not_hover: None,
        }
    }
}

/// Drop shadow: an offset, tinted copy of the parent label
struct Shadow<T> {
    label: Label<T>,
    offset: f32,
    color: Vec4,
}

/// Clickable, hoverable text
///
/// Position, scale and string live in the text handle. A shadow is kept in
/// lockstep with the parent by [`Label::sync_shadow`], which every mutating
/// setter calls.
pub struct Label<T> {
    text: T,
    color: Vec4,
    scale_min: f32,
    scale_max: f32,
    shadow: Option<Box<Shadow<T>>>,
    callbacks: LabelCallbacks<T>,
    state: InteractionState,
}

impl<T: fmt::Debug> fmt::Debug for Label<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("text", &self.text)
            .field("color", &self.color)
            .field("scale_min", &self.scale_min)
            .field("scale_max", &self.scale_max)
            .field("has_shadow", &self.shadow.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: TextHandle> Label<T> {
    /// Default upper bound for hover growth
    pub const DEFAULT_SCALE_MAX: f32 = 1.2;

    /// Wrap a text handle with base scale 1 and black text
    pub fn new(mut text: T, content: &str) -> Self {
        let color = Vec4::new(0.0, 0.0, 0.0, 1.0);
        text.set_string(content);
        text.set_scale(1.0);
        text.set_position(0.0, 0.0);
        text.set_color(color);
        Self {
            text,
            color,
            scale_min: 1.0,
            scale_max: Self::DEFAULT_SCALE_MAX,
            shadow: None,
            callbacks: LabelCallbacks::default(),
            state: InteractionState::default(),
        }
    }

    /// Current string
    pub fn text(&self) -> &str {
        self.text.string()
    }

    /// Replace the string on the label and its shadow
    pub fn set_text(&mut self, content: &str) {
        let position = self.text.position();
        self.text.set_string(content);
        self.text.set_position(position.x, position.y);
        self.sync_shadow();
    }

    /// Centre position in projection space
    pub fn position(&self) -> Point {
        self.text.position()
    }

    /// Move the label; the shadow follows
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.text.set_position(x, y);
        self.sync_shadow();
    }

    /// Current render scale
    pub fn scale(&self) -> f32 {
        self.text.scale()
    }

    /// Set the render scale directly; the shadow follows
    pub fn set_scale(&mut self, scale: f32) {
        self.text.set_scale(scale);
        self.sync_shadow();
    }

    /// Base (minimum) scale restored by [`Label::reset_scale`]
    pub const fn scale_min(&self) -> f32 {
        self.scale_min
    }

    /// Upper bound for [`Label::grow`]
    pub const fn scale_max(&self) -> f32 {
        self.scale_max
    }

    /// Set the scale range used by growth and reset
    pub fn set_scale_bounds(&mut self, min: f32, max: f32) {
        self.scale_min = min;
        self.scale_max = max.max(min);
        self.text.set_scale(self.text.scale().clamp(self.scale_min, self.scale_max));
        self.sync_shadow();
    }

    /// Increase the scale by `rate`, capped at the maximum
    pub fn grow(&mut self, rate: f32) {
        let scale = (self.text.scale() + rate).min(self.scale_max);
        self.text.set_scale(scale);
    }

    /// Decrease the scale by `rate`, floored at the base scale
    pub fn shrink(&mut self, rate: f32) {
        let scale = (self.text.scale() - rate).max(self.scale_min);
        self.text.set_scale(scale);
    }

    /// Restore the base scale on the label and its shadow
    pub fn reset_scale(&mut self) {
        self.text.set_scale(self.scale_min);
        self.sync_shadow();
    }

    /// Text color (RGBA)
    pub const fn color(&self) -> Vec4 {
        self.color
    }

    /// Set the text color; the shadow keeps its own tint
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
        self.text.set_color(color);
    }

    /// Set the click callback
    pub fn set_on_click(&mut self, callback: impl Fn(&mut Self, PointerEvent) + 'static) {
        self.callbacks.on_click = Some(Rc::new(callback));
        self.sync_shadow();
    }

    /// Set the release callback
    pub fn set_on_release(&mut self, callback: impl Fn(&mut Self, PointerEvent) + 'static) {
        self.callbacks.on_release = Some(Rc::new(callback));
        self.sync_shadow();
    }

    /// Set the hover callback
    pub fn set_on_hover(&mut self, callback: impl Fn(&mut Self, PointerEvent) + 'static) {
        self.callbacks.on_hover = Some(Rc::new(callback));
        self.sync_shadow();
    }

    /// Set the not-hovered callback
    pub fn set_on_not_hover(&mut self, callback: impl Fn(&mut Self) + 'static) {
        self.callbacks.on_not_hover = Some(Rc::new(callback));
        self.sync_shadow();
    }

    /// Bound callbacks
    pub const fn callbacks(&self) -> &LabelCallbacks<T> {
        &self.callbacks
    }

    /// Attach a drop shadow drawn from `text`
    ///
    /// The shadow sits `offset` units right of and above the label in
    /// projection space and is tinted with `color`. Any previous shadow is
    /// replaced.
    pub fn attach_shadow(&mut self, mut text: T, offset: f32, color: Vec4) {
        text.set_scale(self.text.scale());
        self.shadow = Some(Box::new(Shadow {
            label: Self {
                text,
                color,
                scale_min: self.scale_min,
                scale_max: self.scale_max,
                shadow: None,
                callbacks: LabelCallbacks::default(),
                state: InteractionState::default(),
            },
            offset,
            color,
        }));
        self.sync_shadow();
    }

    /// Copy string, position, scale, scale bounds and callbacks onto the shadow
    pub fn sync_shadow(&mut self) {
        let Some(shadow) = self.shadow.as_mut() else {
            return;
        };
        let position = self.text.position();
        let label = &mut shadow.label;
        label.color = shadow.color;
        label.text.set_color(shadow.color);
        label.text.set_string(self.text.string());
        label.text.set_position(position.x + shadow.offset, position.y + shadow.offset);
        label.text.set_scale(self.text.scale());
        label.scale_min = self.scale_min;
        label.scale_max = self.scale_max;
        label.callbacks = self.callbacks.clone();
    }

    /// The shadow label, if attached
    pub fn shadow(&self) -> Option<&Self> {
        self.shadow.as_ref().map(|shadow| &shadow.label)
    }

    /// Shadow offset, if a shadow is attached
    pub fn shadow_offset(&self) -> Option<f32> {
        self.shadow.as_ref().map(|shadow| shadow.offset)
    }

    /// Underlying text handle
    pub const fn text_handle(&self) -> &T {
        &self.text
    }

    /// Run the not-hovered callback on the label and its shadow
    ///
    /// The shadow is re-synced afterwards so it cannot drift from the label.
    pub fn fire_not_hover(&mut self) {
        let Some(callback) = self.callbacks.on_not_hover.clone() else {
            return;
        };
        callback(self);
        if let Some(shadow) = self.shadow.as_mut() {
            callback(&mut shadow.label);
        }
        self.sync_shadow();
    }

    /// Draw the shadow, then the label
    pub fn draw(&mut self) {
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.label.text.draw();
        }
        self.text.draw();
    }
}

impl<T: TextHandle> Interactable for Label<T> {
    fn bounds(&self) -> BoundingBox {
        self.text.bounding_box()
    }

    fn state(&self) -> &InteractionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    fn fire_click(&mut self, event: PointerEvent) {
        if let Some(callback) = self.callbacks.on_click.clone() {
            callback(self, event);
        }
    }

    fn fire_release(&mut self, event: PointerEvent) {
        if let Some(callback) = self.callbacks.on_release.clone() {
            callback(self, event);
        }
    }

    fn fire_hover(&mut self, event: PointerEvent) {
        let Some(callback) = self.callbacks.on_hover.clone() else {
            return;
        };
        callback(self, event);
        if let Some(shadow) = self.shadow.as_mut() {
            callback(&mut shadow.label, event);
        }
        self.sync_shadow();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontConfig;
    use crate::foundation::math::rgb;
    use crate::input::MouseButton;
    use crate::ui::backend::headless::{HeadlessFontLoader, HeadlessText, TextLog};
    use crate::ui::backend::{Font, FontLoader};
    use crate::ui::geometry::WindowSize;
    use approx::assert_relative_eq;
    use std::cell::{Cell, RefCell};

    fn font_with_log(log: TextLog) -> crate::ui::backend::headless::HeadlessFont {
        let config = FontConfig { scale: 20, ..FontConfig::default() };
        HeadlessFontLoader::with_log(log).load_font(&config).unwrap()
    }

    fn label(content: &str) -> Label<HeadlessText> {
        Label::new(font_with_log(TextLog::default()).load_text(), content)
    }

    const WINDOW: WindowSize = WindowSize::new(800.0, 600.0);

    #[test]
    fn test_new_label_defaults() {
        let label = label("Start");
        assert_eq!(label.text(), "Start");
        assert_eq!(label.position(), Point::new(0.0, 0.0));
        assert_eq!(label.scale(), 1.0);
        assert_eq!(label.color(), rgb(0.0, 0.0, 0.0));
        assert!(label.shadow().is_none());
    }

    #[test]
    fn test_shadow_follows_text_and_position() {
        let mut label = label("Start");
        let shadow_text = font_with_log(TextLog::default()).load_text();
        label.set_position(10.0, 20.0);
        label.attach_shadow(shadow_text, 2.0, rgb(0.5, 0.5, 0.5));

        label.set_text("X");
        let shadow = label.shadow().unwrap();
        assert_eq!(shadow.text(), "X");
        assert_eq!(shadow.position(), Point::new(12.0, 22.0));
        assert_eq!(shadow.text_handle().color(), rgb(0.5, 0.5, 0.5));

        label.set_position(-5.0, 0.0);
        assert_eq!(label.shadow().unwrap().position(), Point::new(-3.0, 2.0));
    }

    #[test]
    fn test_set_text_keeps_anchor() {
        let mut label = label("Start");
        label.set_position(30.0, -40.0);
        label.set_text("Options");
        assert_eq!(label.position(), Point::new(30.0, -40.0));
    }

    #[test]
    fn test_shadow_copies_callbacks() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        assert!(label.shadow().unwrap().callbacks().on_click.is_none());

        label.set_on_click(|_, _| {});
        label.set_on_not_hover(|_| {});
        let callbacks = label.shadow().unwrap().callbacks();
        assert!(callbacks.on_click.is_some());
        assert!(callbacks.on_not_hover.is_some());
        assert!(callbacks.on_release.is_none());
    }

    #[test]
    fn test_shadow_drawn_before_label() {
        let log = TextLog::default();
        let font = font_with_log(Rc::clone(&log));
        let mut label = Label::new(font.load_text(), "Start");
        label.attach_shadow(font.load_text(), 3.0, rgb(0.1, 0.1, 0.1));

        label.draw();
        let draws = log.borrow();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].position, Point::new(3.0, 3.0));
        assert_eq!(draws[1].position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_click_callback_receives_label() {
        let mut label = label("Start");
        let clicked = Rc::new(Cell::new(false));
        let seen = Rc::clone(&clicked);
        label.set_on_click(move |label, event| {
            assert!(event.in_box);
            assert_eq!(event.button, MouseButton::Left);
            label.set_text("Clicked");
            seen.set(true);
        });

        // "Start" is 50x20 centred on the window centre
        assert!(label.notify_pressed(400.0, 300.0, MouseButton::Left, WINDOW));
        assert!(clicked.get());
        assert_eq!(label.text(), "Clicked");
    }

    #[test]
    fn test_hit_box_edges_are_exclusive() {
        let mut label = label("Start");
        assert!(!label.notify_pressed(375.0, 300.0, MouseButton::Left, WINDOW));
        assert!(!label.notify_pressed(425.0, 300.0, MouseButton::Left, WINDOW));
        assert!(!label.notify_pressed(400.0, 310.0, MouseButton::Left, WINDOW));
        assert!(label.notify_pressed(376.0, 309.0, MouseButton::Left, WINDOW));
    }

    #[test]
    fn test_release_without_callback_clears_press() {
        let mut label = label("Start");
        label.notify_pressed(400.0, 300.0, MouseButton::Left, WINDOW);
        assert!(label.is_pressed());
        label.notify_released(0.0, 0.0, MouseButton::Left, WINDOW);
        assert!(!label.is_pressed());
    }

    #[test]
    fn test_hover_grows_label_and_shadow() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        label.set_on_hover(|label, _| label.grow(0.05));

        label.notify_hovered(400.0, 300.0, WINDOW);
        label.notify_hovered(400.0, 300.0, WINDOW);
        assert_relative_eq!(label.scale(), 1.1, epsilon = 1e-5);
        assert_relative_eq!(label.shadow().unwrap().scale(), 1.1, epsilon = 1e-5);

        label.reset_scale();
        assert_eq!(label.scale(), label.scale_min());
        assert_eq!(label.shadow().unwrap().scale(), label.scale_min());
    }

    #[test]
    fn test_shadow_follows_scale_bounds_set_after_attach() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        label.set_scale_bounds(1.0, 1.5);
        label.set_on_hover(|label, _| label.grow(0.1));

        for _ in 0..10 {
            label.notify_hovered(400.0, 300.0, WINDOW);
        }
        let shadow = label.shadow().unwrap();
        assert_relative_eq!(label.scale(), 1.5);
        assert_relative_eq!(shadow.scale(), 1.5);
        assert_relative_eq!(shadow.scale_max(), 1.5);
    }

    #[test]
    fn test_shadow_shrinks_to_new_base_scale() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        label.set_scale_bounds(0.8, 1.2);
        label.reset_scale();
        label.set_on_not_hover(|label| label.shrink(0.01));

        label.fire_not_hover();
        assert_relative_eq!(label.scale(), 0.8);
        assert_relative_eq!(label.shadow().unwrap().scale(), 0.8);
        assert_relative_eq!(label.shadow().unwrap().scale_min(), 0.8);
    }

    #[test]
    fn test_set_scale_reaches_shadow() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        label.set_scale(1.15);
        assert_relative_eq!(label.shadow().unwrap().scale(), 1.15);
    }

    #[test]
    fn test_grow_and_shrink_are_clamped() {
        let mut label = label("Start");
        label.set_scale_bounds(1.0, 1.5);
        for _ in 0..20 {
            label.grow(0.1);
        }
        assert_relative_eq!(label.scale(), 1.5);
        for _ in 0..20 {
            label.shrink(0.1);
        }
        assert_relative_eq!(label.scale(), 1.0);
    }

    #[test]
    fn test_not_hover_reaches_shadow() {
        let mut label = label("Start");
        label.attach_shadow(font_with_log(TextLog::default()).load_text(), 2.0, rgb(0.2, 0.2, 0.2));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        label.set_on_not_hover(move |label| seen.borrow_mut().push(label.position()));

        label.fire_not_hover();
        assert_eq!(*calls.borrow(), vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
    }
}
