//! Themed presentation of alertkit dialogs.
//!
//! This crate connects the layout engine to a presented alert:
//! - [`GiveawayInfoAlertContent`] styles content from a theme and re-lays it out on theme changes
//! - [`ThemeStream`] pushes theme updates; [`Subscription`] releases exactly once
//! - [`AlertController`] hosts one presentation and owns its subscription
//! - [`TessellatedImageGenerator`] builds the warning banner background
//!
//! # Example
//!
//! ```
//! use alertkit_core::{ActionSpec, ActionStyle, AlertTheme, DialogContent, Size};
//! use alertkit_layout::EstimatingMeasurer;
//! use alertkit_present::{giveaway_info_alert_controller, ThemeStream};
//!
//! let themes = ThemeStream::new(AlertTheme::light());
//! let content = DialogContent::new(
//!     "Giveaway Ended",
//!     "**3 winners** were selected.",
//!     None,
//!     vec![ActionSpec::inert("OK", ActionStyle::Default)],
//! )?;
//! let alert = giveaway_info_alert_controller(&themes, Box::new(EstimatingMeasurer::default()), content);
//! let size = alert.borrow_mut().container_layout(Size::new(390.0, 844.0));
//! assert_eq!(size.width, 270.0);
//!
//! themes.publish(AlertTheme::dark());
//! alert.borrow_mut().dismiss();
//! assert_eq!(themes.subscriber_count(), 0);
//! # Ok::<(), alertkit_core::ContentError>(())
//! ```

mod content;
mod controller;
mod image;
mod stream;

pub use content::{
    AlertContent, ContentAppearance, GiveawayInfoAlertContent, WARNING_BACKGROUND_ALPHA,
    WARNING_BACKGROUND_RADIUS,
};
pub use controller::{giveaway_info_alert_controller, press_action, AlertController, SharedAlertController};
pub use image::{Mesh, RoundedImageGenerator, StretchableImage, TessellatedImageGenerator, Vertex};
pub use stream::{Subscription, ThemeCallback, ThemeSource, ThemeStream};
