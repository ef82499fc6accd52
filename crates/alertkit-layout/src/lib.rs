//! Adaptive layout for alertkit dialogs.
//!
//! Given styled content and an available width, the engine computes the
//! dialog's intrinsic size and the frame of every element: title, body,
//! warning banner, action buttons, and separators.
//!
//! # Architecture
//!
//! 1. **Styling**: [`StyledContent`] turns content and a theme into attributed text
//! 2. **Measurement**: a [`TextMeasurer`] reports natural text sizes
//! 3. **Layout**: [`AlertLayoutEngine`] picks row or stacked actions and positions everything
//!
//! # Example
//!
//! ```
//! use alertkit_core::{ActionSpec, ActionStyle, DialogContent};
//! use alertkit_layout::{AlertLayoutEngine, EstimatingMeasurer};
//!
//! let content = DialogContent::new(
//!     "Giveaway",
//!     "Subscribers of **3 channels** will win.",
//!     None,
//!     vec![ActionSpec::inert("OK", ActionStyle::Default)],
//! )?;
//! let layout = AlertLayoutEngine::default().compute(&content, 375.0, &EstimatingMeasurer::default());
//! assert_eq!(layout.content_size.width, 270.0);
//! # Ok::<(), alertkit_core::ContentError>(())
//! ```

mod compute;
mod measure;
mod styled;

pub use compute::{
    compute_layout, ActionLayoutMode, AlertLayoutEngine, ElementId, LayoutOptions, LayoutResult,
};
pub use measure::{EstimatingMeasurer, TextMeasurer};
pub use styled::{StyledContent, ACTION_FONT_SIZE, BODY_FONT_SIZE, TITLE_FONT_SIZE, WARNING_FONT_SIZE};
