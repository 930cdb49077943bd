//! Projection-space / window-space geometry
//!
//! Widget geometry is authored in an origin-centred orthographic projection,
//! while pointer positions arrive in window space with the origin at a window
//! corner. Everything here is stateless: the window size is passed in on each
//! call so a resize takes effect on the very next event.

use crate::foundation::math::Point;
use serde::{Deserialize, Serialize};

/// Current window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl WindowSize {
    /// Create a window size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box given by its lower-left and upper-right corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner
    pub lower_left: Point,
    /// Upper-right corner
    pub upper_right: Point,
}

impl BoundingBox {
    /// Create a box from its corners
    pub const fn new(lower_left: Point, upper_right: Point) -> Self {
        Self { lower_left, upper_right }
    }

    /// Box of `width` x `height` centred on `center`
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            lower_left: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            upper_right: Point::new(center.x + width / 2.0, center.y + height / 2.0),
        }
    }

    /// Width of the box
    pub fn width(&self) -> f32 {
        self.upper_right.x - self.lower_left.x
    }

    /// Height of the box
    pub fn height(&self) -> f32 {
        self.upper_right.y - self.lower_left.y
    }

    /// Convert both corners from projection space to window space
    pub fn to_screen_space(&self, window: WindowSize) -> Self {
        Self {
            lower_left: to_screen_space(self.lower_left, window),
            upper_right: to_screen_space(self.upper_right, window),
        }
    }

    /// Strict containment test, see [`hit_test`]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        hit_test(x, y, self.lower_left, self.upper_right)
    }
}

/// Convert a projection-space point to window space
///
/// Shifts the origin from the window centre to the lower-left corner by
/// adding half the window size.
pub fn to_screen_space(point: Point, window: WindowSize) -> Point {
    Point::new(point.x + window.width / 2.0, point.y + window.height / 2.0)
}

/// Check whether a pointer lies strictly inside a box
///
/// Points on the boundary are outside.
#[allow(clippy::cast_possible_truncation)]
pub fn hit_test(x: f64, y: f64, lower_left: Point, upper_right: Point) -> bool {
    let (x, y) = (x as f32, y as f32);
    x > lower_left.x && x < upper_right.x && y > lower_left.y && y < upper_right.y
}

/// Flip a top-left-origin pointer Y into the bottom-left, Y-up convention
pub fn flip_y(raw_y: f64, window_height: f32) -> f64 {
    f64::from(window_height) - raw_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> (Point, Point) {
        (Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_hit_test_inside() {
        let (ll, ur) = unit_box();
        assert!(hit_test(5.0, 5.0, ll, ur));
    }

    #[test]
    fn test_hit_test_boundary_is_outside() {
        let (ll, ur) = unit_box();
        assert!(!hit_test(0.0, 5.0, ll, ur));
        assert!(!hit_test(10.0, 5.0, ll, ur));
        assert!(!hit_test(5.0, 0.0, ll, ur));
        assert!(!hit_test(5.0, 10.0, ll, ur));
    }

    #[test]
    fn test_hit_test_outside() {
        let (ll, ur) = unit_box();
        assert!(!hit_test(-1.0, 5.0, ll, ur));
        assert!(!hit_test(5.0, 11.0, ll, ur));
    }

    #[test]
    fn test_to_screen_space_tracks_window_size() {
        let point = Point::new(-10.0, 20.0);
        assert_eq!(to_screen_space(point, WindowSize::new(800.0, 600.0)), Point::new(390.0, 320.0));
        assert_eq!(to_screen_space(point, WindowSize::new(1024.0, 768.0)), Point::new(502.0, 404.0));
    }

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(0.0, 600.0), 600.0);
        assert_eq!(flip_y(150.0, 600.0), 450.0);
    }

    #[test]
    fn test_centered_box_in_screen_space() {
        let bounds = BoundingBox::centered(Point::new(0.0, 0.0), 100.0, 20.0);
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 20.0);

        let screen = bounds.to_screen_space(WindowSize::new(800.0, 600.0));
        assert_eq!(screen.lower_left, Point::new(350.0, 290.0));
        assert_eq!(screen.upper_right, Point::new(450.0, 310.0));
        assert!(screen.contains(400.0, 300.0));
        assert!(!screen.contains(350.0, 300.0));
    }
}
