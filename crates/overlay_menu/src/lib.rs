//! # Overlay Menu
//!
//! Interactive overlay menu widgets for real-time rendered applications.
//!
//! A [`ui::Panel`] draws a translucent background quad with clickable,
//! hoverable [`ui::Label`]s and editable [`ui::TextBox`]es on top of it. All
//! widget geometry lives in an origin-centred orthographic projection while
//! pointer events arrive in window space; the panel reconciles the two on
//! every event so hit testing stays correct across window resizes.
//!
//! Text rendering and GPU buffer upload are supplied by the host through the
//! traits in [`ui::backend`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use overlay_menu::prelude::*;
//! use overlay_menu::ui::backend::headless::{HeadlessFontLoader, HeadlessGeometry};
//!
//! fn main() -> Result<(), MenuError> {
//!     let config = MenuConfig::default();
//!     let mut panel = Panel::load(&config, &HeadlessFontLoader::default(), HeadlessGeometry::default())?;
//!
//!     let start = panel.add_label("Start");
//!     if let Some(label) = panel.label_mut(start) {
//!         label.set_position(0.0, 40.0);
//!         label.set_on_hover(|label, _| label.grow(0.01));
//!     }
//!
//!     panel.toggle_visibility();
//!     panel.dispatch_hover(400.0, 260.0);
//!     panel.draw();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod ui;

/// Common imports for menu users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, FontConfig, MenuConfig},
        foundation::math::{Point, Vec2, Vec4},
        input::{Key, KeyModifiers, MouseButton},
        ui::{
            BoundingBox, Interactable, InteractionState, Label, LabelId, MenuError, Panel,
            PointerEvent, TextBox, TextBoxId, WindowSize,
        },
    };
}
