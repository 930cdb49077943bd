//! Menu widgets
//!
//! Labels and text boxes, both driven through [`Interactable`](crate::ui::Interactable).

pub mod label;
pub mod textbox;

pub use label::{Label, LabelCallback, LabelCallbacks, NotHoverCallback};
pub use textbox::{TextBox, TextBoxCallback, CURSOR_GLYPH, DEFAULT_BLINK_INTERVAL};
