//! Core types, content model, and theming for alertkit dialogs.
//!
//! This crate provides the foundational types used by the other alertkit crates:
//! - Geometry (points, sizes, rects, insets) in logical units
//! - Colors, fonts, and attributed text
//! - The immutable dialog content model
//! - The alert chrome theme
//! - Error types

pub mod content;
pub mod errors;
pub mod geometry;
pub mod text;
pub mod theme;
pub mod types;

pub use content::*;
pub use errors::*;
pub use geometry::*;
pub use text::*;
pub use theme::*;
pub use types::*;
