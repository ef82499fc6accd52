//! The giveaway info alert content.

use log::debug;

use alertkit_core::{ActionSpec, AlertTheme, Color, DialogContent, Size};
use alertkit_layout::{AlertLayoutEngine, LayoutOptions, LayoutResult, StyledContent, TextMeasurer};

use crate::image::{RoundedImageGenerator, StretchableImage, TessellatedImageGenerator};

/// Corner radius of the warning banner background.
pub const WARNING_BACKGROUND_RADIUS: f64 = 5.0;
/// Opacity of the destructive color behind the warning text.
pub const WARNING_BACKGROUND_ALPHA: f32 = 0.1;

/// Content hosted inside an alert chrome.
pub trait AlertContent {
    /// Restyle for a new theme.
    fn update_theme(&mut self, theme: &AlertTheme);

    /// Lay out within `size` and return the content size.
    fn update_layout(&mut self, size: Size) -> Size;

    /// Whether a tap outside the alert dismisses it.
    fn dismiss_on_outside_tap(&self) -> bool;

    fn is_interactive(&self) -> bool;

    fn set_interactive(&mut self, interactive: bool);

    fn actions(&self) -> &[ActionSpec];
}

/// Theme-derived visuals that are not text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAppearance {
    pub background_color: Color,
    pub separator_color: Color,
    /// Fill of a pressed action
    pub highlighted_action_color: Color,
    pub warning_background: Option<StretchableImage>,
}

/// Title, markdown body, optional warning banner, and actions.
pub struct GiveawayInfoAlertContent {
    content: DialogContent,
    theme: AlertTheme,
    engine: AlertLayoutEngine,
    measurer: Box<dyn TextMeasurer>,
    image_generator: Box<dyn RoundedImageGenerator>,
    styled: StyledContent,
    appearance: ContentAppearance,
    valid_layout: Option<Size>,
    layout: Option<LayoutResult>,
    layout_passes: usize,
    interactive: bool,
}

impl GiveawayInfoAlertContent {
    pub fn new(content: DialogContent, theme: &AlertTheme, measurer: Box<dyn TextMeasurer>) -> Self {
        Self::with_options(content, theme, measurer, LayoutOptions::default())
    }

    pub fn with_options(
        content: DialogContent,
        theme: &AlertTheme,
        measurer: Box<dyn TextMeasurer>,
        options: LayoutOptions,
    ) -> Self {
        let image_generator: Box<dyn RoundedImageGenerator> = Box::new(TessellatedImageGenerator);
        let styled = StyledContent::new(&content, theme);
        let appearance = appearance(&content, theme, image_generator.as_ref());
        Self {
            content,
            theme: theme.clone(),
            engine: AlertLayoutEngine::new(options),
            measurer,
            image_generator,
            styled,
            appearance,
            valid_layout: None,
            layout: None,
            layout_passes: 0,
            interactive: true,
        }
    }

    /// Replace the background generator and regenerate with `theme`.
    pub fn with_image_generator(mut self, generator: Box<dyn RoundedImageGenerator>, theme: &AlertTheme) -> Self {
        self.image_generator = generator;
        self.appearance = appearance(&self.content, theme, self.image_generator.as_ref());
        self
    }

    pub fn content(&self) -> &DialogContent {
        &self.content
    }

    pub fn styled(&self) -> &StyledContent {
        &self.styled
    }

    pub fn appearance(&self) -> &ContentAppearance {
        &self.appearance
    }

    /// The last size passed to [`AlertContent::update_layout`], clamped to the maximum width.
    pub fn valid_layout(&self) -> Option<Size> {
        self.valid_layout
    }

    /// The most recent layout pass.
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    /// Number of layout passes run so far.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }
}

fn appearance(content: &DialogContent, theme: &AlertTheme, generator: &dyn RoundedImageGenerator) -> ContentAppearance {
    let warning_background = content.warning().map(|_| {
        generator.generate(
            WARNING_BACKGROUND_RADIUS,
            theme.destructive.with_alpha(WARNING_BACKGROUND_ALPHA),
        )
    });
    ContentAppearance {
        background_color: theme.background,
        separator_color: theme.separator,
        highlighted_action_color: theme.highlighted_item,
        warning_background,
    }
}

impl AlertContent for GiveawayInfoAlertContent {
    fn update_theme(&mut self, theme: &AlertTheme) {
        self.theme = theme.clone();
        self.styled = StyledContent::with_actions_enabled(&self.content, theme, self.interactive);
        self.appearance = appearance(&self.content, theme, self.image_generator.as_ref());
        debug!("giveaway alert: theme updated ({:?})", theme.kind);

        if let Some(size) = self.valid_layout {
            self.update_layout(size);
        }
    }

    fn update_layout(&mut self, size: Size) -> Size {
        let size = Size::new(size.width.min(self.engine.options().max_width), size.height);
        self.valid_layout = Some(size);

        let result = self
            .engine
            .compute_styled(&self.styled, size.width, self.measurer.as_ref());
        let content_size = result.content_size;
        self.layout = Some(result);
        self.layout_passes += 1;
        content_size
    }

    fn dismiss_on_outside_tap(&self) -> bool {
        self.interactive
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_interactive(&mut self, interactive: bool) {
        if self.interactive == interactive {
            return;
        }
        self.interactive = interactive;
        self.styled = StyledContent::with_actions_enabled(&self.content, &self.theme, interactive);
    }

    fn actions(&self) -> &[ActionSpec] {
        self.content.actions()
    }
}
