//! Foundation module - Core utilities and types
//!
//! - Math types shared by geometry and rendering
//! - Logging initialization

pub mod math;
pub mod logging;
