//! Menu UI Module
//!
//! Architecture:
//! - geometry: projection-space / window-space transforms and hit testing
//! - interact: press / release / hover state machine shared by widgets
//! - widgets/: Label and TextBox
//! - panel: owner of widgets, font and window state; event dispatch
//! - rendering/: panel and border geometry
//! - backend/: text and geometry collaborator traits

pub mod geometry;
pub mod interact;
pub mod widgets;
pub mod panel;
pub mod rendering;
pub mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use error::MenuError;
pub use geometry::{BoundingBox, WindowSize};
pub use interact::{Callback, Interactable, InteractionState, PointerEvent};
pub use panel::{LabelId, Panel, TextBoxId};
pub use widgets::{Label, TextBox};
