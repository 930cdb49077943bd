//! Press / release / hover state machine shared by labels and text boxes
//!
//! Widgets provide their bounding box, their [`InteractionState`] and the
//! callback hooks; the provided methods on [`Interactable`] run the state
//! machine. Hit testing never depends on whether a callback is bound.

use crate::input::MouseButton;
use crate::ui::geometry::{BoundingBox, WindowSize};
use std::rc::Rc;

/// User callback invoked with the widget and the pointer event
///
/// Callbacks are reference counted so a label's shadow can share them.
pub type Callback<W> = Rc<dyn Fn(&mut W, PointerEvent)>;

/// Pointer event delivered to widget callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer X in window space
    pub x: f64,
    /// Pointer Y in window space, Y-up
    pub y: f64,
    /// Button involved; [`MouseButton::Unclicked`] for hover
    pub button: MouseButton,
    /// Whether the pointer was inside the widget for this event
    pub in_box: bool,
}

/// Per-widget interaction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Result of the latest hover hit test
    pub is_hovered: bool,
    /// A press landed inside and has not been released yet
    pub is_pressed: bool,
}

/// Hit-testable widget driven by pointer events
///
/// Pointer coordinates passed to the `notify_*` methods are window-space with
/// Y growing upward; the owning panel performs the Y flip once before
/// forwarding.
pub trait Interactable {
    /// Current hit box in projection space
    fn bounds(&self) -> BoundingBox;

    /// Interaction flags
    fn state(&self) -> &InteractionState;

    /// Mutable interaction flags
    fn state_mut(&mut self) -> &mut InteractionState;

    /// Invoke the click callback, if bound
    fn fire_click(&mut self, event: PointerEvent);

    /// Invoke the release callback, if bound
    fn fire_release(&mut self, event: PointerEvent);

    /// Invoke the hover callback, if bound
    fn fire_hover(&mut self, _event: PointerEvent) {}

    /// Called when a press misses this widget
    fn pressed_outside(&mut self) {}

    /// Called on release when a press was pending, before the release callback
    fn released_after_press(&mut self) {}

    /// Hit box converted to window space for the given window size
    fn screen_bounds(&self, window: WindowSize) -> BoundingBox {
        self.bounds().to_screen_space(window)
    }

    /// Whether the latest hover hit test was inside
    fn is_hovered(&self) -> bool {
        self.state().is_hovered
    }

    /// Whether a press is pending
    fn is_pressed(&self) -> bool {
        self.state().is_pressed
    }

    /// Handle a button press; returns the hit result
    fn notify_pressed(&mut self, x: f64, y: f64, button: MouseButton, window: WindowSize) -> bool {
        let in_box = self.screen_bounds(window).contains(x, y);
        if in_box {
            self.state_mut().is_pressed = true;
            self.fire_click(PointerEvent { x, y, button, in_box });
        } else {
            self.pressed_outside();
        }
        in_box
    }

    /// Handle a button release; returns the hit result at the release position
    ///
    /// The release callback only runs when a press was pending, and receives
    /// the release-time hit result, so press-drag-release outside reports
    /// `in_box == false`. The pending press is always cleared.
    fn notify_released(&mut self, x: f64, y: f64, button: MouseButton, window: WindowSize) -> bool {
        let in_box = self.screen_bounds(window).contains(x, y);
        if self.state().is_pressed {
            self.released_after_press();
            self.fire_release(PointerEvent { x, y, button, in_box });
        }
        self.state_mut().is_pressed = false;
        in_box
    }

    /// Handle pointer motion; returns the hit result
    fn notify_hovered(&mut self, x: f64, y: f64, window: WindowSize) -> bool {
        let in_box = self.screen_bounds(window).contains(x, y);
        self.state_mut().is_hovered = in_box;
        if in_box {
            self.fire_hover(PointerEvent { x, y, button: MouseButton::Unclicked, in_box });
        }
        in_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point;

    /// Fixed 10x10 box at the projection origin with event recording
    #[derive(Default)]
    struct Probe {
        state: InteractionState,
        clicks: Vec<PointerEvent>,
        releases: Vec<PointerEvent>,
        hovers: usize,
        misses: usize,
    }

    impl Interactable for Probe {
        fn bounds(&self) -> BoundingBox {
            BoundingBox::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
        }
        fn state(&self) -> &InteractionState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut InteractionState {
            &mut self.state
        }
        fn fire_click(&mut self, event: PointerEvent) {
            self.clicks.push(event);
        }
        fn fire_release(&mut self, event: PointerEvent) {
            self.releases.push(event);
        }
        fn fire_hover(&mut self, _event: PointerEvent) {
            self.hovers += 1;
        }
        fn pressed_outside(&mut self) {
            self.misses += 1;
        }
    }

    // With a zero-sized window, screen space equals projection space.
    const WINDOW: WindowSize = WindowSize::new(0.0, 0.0);

    #[test]
    fn test_press_inside_then_release_inside() {
        let mut probe = Probe::default();
        assert!(probe.notify_pressed(5.0, 5.0, MouseButton::Left, WINDOW));
        assert!(probe.is_pressed());
        assert_eq!(probe.clicks.len(), 1);
        assert!(probe.clicks[0].in_box);

        assert!(probe.notify_released(6.0, 6.0, MouseButton::Left, WINDOW));
        assert!(!probe.is_pressed());
        assert_eq!(probe.releases.len(), 1);
        assert!(probe.releases[0].in_box);
    }

    #[test]
    fn test_press_inside_release_outside_reports_out_of_box() {
        let mut probe = Probe::default();
        probe.notify_pressed(5.0, 5.0, MouseButton::Left, WINDOW);
        assert!(!probe.notify_released(50.0, 5.0, MouseButton::Left, WINDOW));

        assert_eq!(probe.releases.len(), 1);
        assert!(!probe.releases[0].in_box);
        assert_eq!(probe.releases[0].x, 50.0);
        assert!(!probe.is_pressed());
    }

    #[test]
    fn test_press_outside_fires_nothing() {
        let mut probe = Probe::default();
        assert!(!probe.notify_pressed(10.0, 5.0, MouseButton::Right, WINDOW));
        assert!(!probe.is_pressed());
        assert!(probe.clicks.is_empty());
        assert_eq!(probe.misses, 1);

        probe.notify_released(5.0, 5.0, MouseButton::Right, WINDOW);
        assert!(probe.releases.is_empty());
    }

    #[test]
    fn test_hover_tracks_latest_hit() {
        let mut probe = Probe::default();
        assert!(probe.notify_hovered(5.0, 5.0, WINDOW));
        assert!(probe.is_hovered());
        assert_eq!(probe.hovers, 1);

        assert!(!probe.notify_hovered(15.0, 5.0, WINDOW));
        assert!(!probe.is_hovered());
        assert_eq!(probe.hovers, 1);
    }

    #[test]
    fn test_repeated_events_are_not_deduplicated() {
        let mut probe = Probe::default();
        probe.notify_hovered(5.0, 5.0, WINDOW);
        probe.notify_hovered(5.0, 5.0, WINDOW);
        assert_eq!(probe.hovers, 2);
        assert!(probe.is_hovered());

        probe.notify_pressed(5.0, 5.0, MouseButton::Left, WINDOW);
        probe.notify_pressed(5.0, 5.0, MouseButton::Left, WINDOW);
        assert_eq!(probe.clicks.len(), 2);
        assert!(probe.is_pressed());
    }

    #[test]
    fn test_screen_bounds_follow_window() {
        let mut probe = Probe::default();
        let window = WindowSize::new(100.0, 50.0);
        assert!(!probe.notify_pressed(5.0, 5.0, MouseButton::Left, window));
        assert!(probe.notify_pressed(55.0, 30.0, MouseButton::Left, window));
    }
}
