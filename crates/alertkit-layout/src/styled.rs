//! Styling of dialog content into attributed strings.

use smallvec::SmallVec;

use alertkit_core::{
    ActionStyle, AlertTheme, AttributedText, DialogContent, Font, TextAlignment,
};
use alertkit_markup::{parse_markdown, MarkdownAttributeSet, MarkdownAttributes};

pub const TITLE_FONT_SIZE: f64 = 17.0;
pub const BODY_FONT_SIZE: f64 = 13.0;
pub const WARNING_FONT_SIZE: f64 = 13.0;
pub const ACTION_FONT_SIZE: f64 = 17.0;

/// Dialog content rendered into styled text for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledContent {
    title: AttributedText,
    body: AttributedText,
    warning: Option<AttributedText>,
    action_titles: SmallVec<[AttributedText; 2]>,
}

impl StyledContent {
    pub fn new(content: &DialogContent, theme: &AlertTheme) -> Self {
        Self::with_actions_enabled(content, theme, true)
    }

    /// Style `content`; disabled action titles use the theme's disabled color.
    pub fn with_actions_enabled(content: &DialogContent, theme: &AlertTheme, actions_enabled: bool) -> Self {
        let title = AttributedText::plain(
            content.title(),
            Font::bold(TITLE_FONT_SIZE),
            theme.primary,
            TextAlignment::Center,
        );

        let body_set = MarkdownAttributeSet::new(Font::regular(BODY_FONT_SIZE), theme.primary);
        let bold_set = MarkdownAttributeSet::new(Font::semibold(BODY_FONT_SIZE), theme.primary);
        let attributes = MarkdownAttributes::new(body_set, bold_set, body_set);
        let body = parse_markdown(content.body_markdown(), &attributes, TextAlignment::Center);

        let warning = content.warning().map(|warning| {
            AttributedText::plain(
                warning,
                Font::semibold(WARNING_FONT_SIZE),
                theme.destructive,
                TextAlignment::Center,
            )
        });

        let action_titles = content
            .actions()
            .iter()
            .map(|action| {
                let font = match action.style {
                    ActionStyle::Default => Font::semibold(ACTION_FONT_SIZE),
                    _ => Font::regular(ACTION_FONT_SIZE),
                };
                let color = match action.style {
                    _ if !actions_enabled => theme.disabled,
                    ActionStyle::Destructive => theme.destructive,
                    _ => theme.accent,
                };
                AttributedText::plain(action.label.as_str(), font, color, TextAlignment::Center)
            })
            .collect();

        Self {
            title,
            body,
            warning,
            action_titles,
        }
    }

    pub fn title(&self) -> &AttributedText {
        &self.title
    }

    pub fn body(&self) -> &AttributedText {
        &self.body
    }

    pub fn warning(&self) -> Option<&AttributedText> {
        self.warning.as_ref()
    }

    /// One entry per action, never empty.
    pub fn action_titles(&self) -> &[AttributedText] {
        &self.action_titles
    }
}
