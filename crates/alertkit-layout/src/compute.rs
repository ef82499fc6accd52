//! Layout computation for an alert.
//!
//! A pass measures the title, body, optional warning, and action labels, picks
//! the action layout mode, and positions every element. Passes hold no state:
//! identical inputs yield identical frames.

use indexmap::IndexMap;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use alertkit_core::{
    floor_to_screen_pixels, hairline, AlertTheme, AttributedText, DialogContent, EdgeInsets, Rect,
    Size,
};

use crate::measure::TextMeasurer;
use crate::styled::StyledContent;

/// Metrics for alert layout.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Upper bound for the dialog width
    pub max_width: f64,
    /// Horizontal inset on each side when measuring text
    pub measure_inset: f64,
    /// Insets around the content
    pub content_insets: EdgeInsets,
    /// Y of the title
    pub title_top: f64,
    /// Gap between title and body
    pub title_body_spacing: f64,
    /// Gap below the body before the warning
    pub body_bottom_spacing: f64,
    /// Spacing between the text block and the actions
    pub text_spacing: f64,
    /// Height of one action button
    pub action_button_height: f64,
    /// Horizontal padding added to each measured action label
    pub action_title_inset: f64,
    /// Fraction of the button height above which a label counts as wrapped
    pub wrap_threshold: f64,
    /// Lower bound for the content width
    pub min_content_width: f64,
    /// Gap between the body block and the warning text
    pub warning_spacing: f64,
    /// Height added to the dialog on top of the warning text height
    pub warning_extra_height: f64,
    /// Outset of the warning background around the warning text
    pub warning_background_outset: f64,
    /// Device pixels per logical unit
    pub screen_scale: f64,
    /// Stack actions even when every label fits in a row
    pub force_stacked_actions: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_width: 270.0,
            measure_inset: 16.0,
            content_insets: EdgeInsets::uniform(18.0),
            title_top: 20.0,
            title_body_spacing: 4.0,
            body_bottom_spacing: 6.0,
            text_spacing: 8.0,
            action_button_height: 44.0,
            action_title_inset: 8.0,
            wrap_threshold: 2.0 / 3.0,
            min_content_width: 234.0,
            warning_spacing: 20.0,
            warning_extra_height: 26.0,
            warning_background_outset: 8.0,
            screen_scale: 2.0,
            force_stacked_actions: false,
        }
    }
}

/// How the action buttons are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionLayoutMode {
    /// Left to right in one band
    #[default]
    Row,
    /// Top to bottom, each spanning the full width
    Stacked,
}

/// Identifies a laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Title,
    Body,
    WarningBackground,
    Warning,
    /// Hairline above the actions block
    ActionsSeparator,
    Action(usize),
    /// Hairline between action `i` and action `i + 1`
    ActionSeparator(usize),
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Intrinsic size of the dialog content
    pub content_size: Size,
    pub mode: ActionLayoutMode,
    /// Frames in paint order
    pub frames: IndexMap<ElementId, Rect>,
}

impl LayoutResult {
    pub fn frame(&self, id: ElementId) -> Option<Rect> {
        self.frames.get(&id).copied()
    }

    /// Frames of the action buttons in order.
    pub fn action_frames(&self) -> Vec<Rect> {
        self.frames
            .iter()
            .filter_map(|(id, rect)| matches!(id, ElementId::Action(_)).then_some(*rect))
            .collect()
    }

    /// Frames of the separators between actions in order.
    pub fn action_separator_frames(&self) -> Vec<Rect> {
        self.frames
            .iter()
            .filter_map(|(id, rect)| matches!(id, ElementId::ActionSeparator(_)).then_some(*rect))
            .collect()
    }

    /// Height of the actions block.
    pub fn actions_height(&self) -> f64 {
        let frames = self.action_frames();
        match (frames.first(), frames.last()) {
            (Some(first), Some(last)) => last.bottom() - first.y,
            _ => 0.0,
        }
    }
}

/// Computes alert layouts with a fixed set of metrics.
#[derive(Debug, Clone, Default)]
pub struct AlertLayoutEngine {
    options: LayoutOptions,
}

impl AlertLayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lay out unstyled content. Colors do not affect layout, so the default
    /// theme is used for styling.
    pub fn compute(&self, content: &DialogContent, available_width: f64, measurer: &dyn TextMeasurer) -> LayoutResult {
        let styled = StyledContent::new(content, &AlertTheme::default());
        self.compute_styled(&styled, available_width, measurer)
    }

    /// Lay out styled content within `available_width`.
    pub fn compute_styled(
        &self,
        content: &StyledContent,
        available_width: f64,
        measurer: &dyn TextMeasurer,
    ) -> LayoutResult {
        let options = &self.options;
        let scale = options.screen_scale;
        let pixel = hairline(scale);

        let working_width = available_width.min(options.max_width).max(0.0);
        let text_constraint =
            Size::with_unbounded_height((working_width - options.measure_inset * 2.0).max(0.0));
        let centered_x = |width: f64| floor_to_screen_pixels((working_width - width) / 2.0, scale);

        let mut frames = IndexMap::new();
        let mut cursor = options.title_top;

        let title_size = measure(measurer, content.title(), text_constraint);
        frames.insert(
            ElementId::Title,
            Rect::new(centered_x(title_size.width), cursor, title_size.width, title_size.height),
        );
        cursor += title_size.height + options.title_body_spacing;

        let body_size = measure(measurer, content.body(), text_constraint);
        frames.insert(
            ElementId::Body,
            Rect::new(centered_x(body_size.width), cursor, body_size.width, body_size.height),
        );
        cursor += body_size.height + options.body_bottom_spacing;

        let action_titles = content.action_titles();
        let action_count = action_titles.len().max(1);
        let button_height = options.action_button_height;

        let max_action_width = (working_width / action_count as f64).floor();
        let label_constraint = Size::new(max_action_width, button_height);
        let label_sizes: SmallVec<[Size; 4]> = action_titles
            .iter()
            .map(|title| measure(measurer, title, label_constraint))
            .collect();

        let mode = self.action_layout_mode(&label_sizes);
        let min_actions_width: f64 = match mode {
            ActionLayoutMode::Row => label_sizes
                .iter()
                .map(|size| size.width + options.action_title_inset)
                .sum(),
            ActionLayoutMode::Stacked => label_sizes
                .iter()
                .map(|size| size.width + options.action_title_inset)
                .fold(0.0_f64, f64::max),
        };

        let content_width = title_size
            .width
            .max(min_actions_width)
            .max(options.min_content_width);
        let result_width = (content_width + options.content_insets.horizontal()).min(working_width);

        let actions_height = match mode {
            ActionLayoutMode::Row => button_height,
            ActionLayoutMode::Stacked => button_height * action_titles.len() as f64,
        };

        let mut warning_height = 0.0;
        if let Some(warning) = content.warning() {
            let warning_size = measure(measurer, warning, text_constraint);
            let warning_frame = Rect::new(
                centered_x(warning_size.width),
                cursor + options.warning_spacing,
                warning_size.width,
                warning_size.height,
            );
            let outset = options.warning_background_outset;
            frames.insert(ElementId::WarningBackground, warning_frame.expand(outset, outset));
            frames.insert(ElementId::Warning, warning_frame);
            warning_height = warning_size.height + options.warning_extra_height;
        }

        let result_height = title_size.height
            + body_size.height
            + options.text_spacing
            + actions_height
            + warning_height
            + options.content_insets.vertical();
        let actions_top = result_height - actions_height;

        frames.insert(
            ElementId::ActionsSeparator,
            Rect::new(0.0, actions_top - pixel, result_width, pixel),
        );

        let action_width = (result_width / action_count as f64).floor();
        let mut separators: SmallVec<[Rect; 4]> = SmallVec::new();
        let mut offset = 0.0;
        for index in 0..action_titles.len() {
            if index > 0 {
                separators.push(match mode {
                    ActionLayoutMode::Row => {
                        Rect::new(offset - pixel, actions_top, pixel, actions_height - pixel)
                    }
                    ActionLayoutMode::Stacked => {
                        Rect::new(0.0, actions_top + offset - pixel, result_width, pixel)
                    }
                });
            }

            let frame = match mode {
                ActionLayoutMode::Row => {
                    let width = if index == action_titles.len() - 1 {
                        result_width - offset
                    } else {
                        action_width
                    };
                    let frame = Rect::new(offset, actions_top, width, button_height);
                    offset += width;
                    frame
                }
                ActionLayoutMode::Stacked => {
                    let frame = Rect::new(0.0, actions_top + offset, result_width, button_height);
                    offset += button_height;
                    frame
                }
            };
            frames.insert(ElementId::Action(index), frame);
        }
        for (index, separator) in separators.into_iter().enumerate() {
            frames.insert(ElementId::ActionSeparator(index), separator);
        }

        let content_size = Size::new(result_width, result_height);
        debug!(
            "alert layout: available={} mode={:?} size={}x{}",
            available_width, mode, content_size.width, content_size.height
        );
        for (id, frame) in &frames {
            trace!("  {:?}: {:?}", id, frame);
        }

        LayoutResult {
            content_size,
            mode,
            frames,
        }
    }

    /// Row unless some label wraps; a single wrapped label stacks every action.
    fn action_layout_mode(&self, label_sizes: &[Size]) -> ActionLayoutMode {
        if self.options.force_stacked_actions {
            return ActionLayoutMode::Stacked;
        }
        let threshold = self.options.action_button_height * self.options.wrap_threshold;
        if label_sizes.iter().any(|size| size.height > threshold) {
            ActionLayoutMode::Stacked
        } else {
            ActionLayoutMode::Row
        }
    }
}

/// Lay out styled content with default metrics.
pub fn compute_layout(content: &StyledContent, available_width: f64, measurer: &dyn TextMeasurer) -> LayoutResult {
    AlertLayoutEngine::default().compute_styled(content, available_width, measurer)
}

fn measure(measurer: &dyn TextMeasurer, text: &AttributedText, constraint: Size) -> Size {
    let size = measurer.measure(text, constraint);
    if !size.is_finite() {
        warn!("measurer returned {:?} for {:?}; using zero", size, text.string());
    }
    size.sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::EstimatingMeasurer;
    use alertkit_core::{ActionSpec, ActionStyle};
    use proptest::prelude::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Measurer with fixed sizes keyed by string.
    fn fixed(text: &AttributedText, _constraint: Size) -> Size {
        match text.string().as_str() {
            "T" => Size::new(20.0, 22.0),
            "B" => Size::new(100.0, 32.0),
            "Warning" => Size::new(150.0, 16.0),
            "Long label that wraps" => Size::new(120.0, 40.0),
            "" => Size::ZERO,
            _ => Size::new(40.0, 20.0),
        }
    }

    fn content(warning: Option<&str>, labels: &[&str]) -> DialogContent {
        let actions = labels
            .iter()
            .map(|label| ActionSpec::inert(*label, ActionStyle::Generic))
            .collect();
        DialogContent::new("T", "B", warning.map(String::from), actions).unwrap()
    }

    #[test]
    fn test_two_short_actions_row() {
        init_logging();
        let engine = AlertLayoutEngine::default();
        let layout = engine.compute(&content(None, &["A", "B2"]), 400.0, &fixed);

        assert_eq!(layout.mode, ActionLayoutMode::Row);
        assert_eq!(layout.content_size, Size::new(270.0, 22.0 + 32.0 + 8.0 + 44.0 + 36.0));
        assert_eq!(layout.frame(ElementId::Title), Some(Rect::new(125.0, 20.0, 20.0, 22.0)));
        assert_eq!(layout.frame(ElementId::Body), Some(Rect::new(85.0, 46.0, 100.0, 32.0)));
        assert_eq!(
            layout.frame(ElementId::ActionsSeparator),
            Some(Rect::new(0.0, 97.5, 270.0, 0.5))
        );
        assert_eq!(
            layout.action_frames(),
            vec![Rect::new(0.0, 98.0, 135.0, 44.0), Rect::new(135.0, 98.0, 135.0, 44.0)]
        );
        assert_eq!(
            layout.action_separator_frames(),
            vec![Rect::new(134.5, 98.0, 0.5, 43.5)]
        );
        assert!(layout.frame(ElementId::Warning).is_none());
    }

    #[test]
    fn test_row_last_action_absorbs_remainder() {
        let engine = AlertLayoutEngine::default();
        let layout = engine.compute(&content(None, &["A", "B2", "C"]), 265.0, &fixed);

        assert_eq!(layout.content_size.width, 265.0);
        let widths: Vec<f64> = layout.action_frames().iter().map(|f| f.width).collect();
        assert_eq!(widths, vec![88.0, 88.0, 89.0]);
        let xs: Vec<f64> = layout.action_frames().iter().map(|f| f.x).collect();
        assert_eq!(xs, vec![0.0, 88.0, 176.0]);
    }

    #[test]
    fn test_one_wrapped_label_stacks_all() {
        let engine = AlertLayoutEngine::default();
        let layout = engine.compute(&content(None, &["A", "Long label that wraps", "C"]), 400.0, &fixed);

        assert_eq!(layout.mode, ActionLayoutMode::Stacked);
        let height = 22.0 + 32.0 + 8.0 + 44.0 * 3.0 + 36.0;
        assert_eq!(layout.content_size, Size::new(270.0, height));
        let top = height - 44.0 * 3.0;
        assert_eq!(
            layout.action_frames(),
            vec![
                Rect::new(0.0, top, 270.0, 44.0),
                Rect::new(0.0, top + 44.0, 270.0, 44.0),
                Rect::new(0.0, top + 88.0, 270.0, 44.0),
            ]
        );
        assert_eq!(
            layout.action_separator_frames(),
            vec![
                Rect::new(0.0, top + 43.5, 270.0, 0.5),
                Rect::new(0.0, top + 87.5, 270.0, 0.5),
            ]
        );
        assert_eq!(layout.actions_height(), 132.0);
    }

    #[test]
    fn test_warning_frames() {
        let engine = AlertLayoutEngine::default();
        let without = engine.compute(&content(None, &["A"]), 400.0, &fixed);
        let with = engine.compute(&content(Some("Warning"), &["A"]), 400.0, &fixed);

        assert_eq!(with.content_size.height - without.content_size.height, 16.0 + 26.0);
        let warning = with.frame(ElementId::Warning).unwrap();
        let body = with.frame(ElementId::Body).unwrap();
        assert_eq!(warning, Rect::new(60.0, body.bottom() + 6.0 + 20.0, 150.0, 16.0));
        assert_eq!(
            with.frame(ElementId::WarningBackground),
            Some(Rect::new(52.0, warning.y - 8.0, 166.0, 32.0))
        );
    }

    #[test]
    fn test_single_action_has_no_separators_between() {
        let engine = AlertLayoutEngine::default();
        let layout = engine.compute(&content(None, &["OK"]), 400.0, &fixed);
        assert_eq!(layout.action_frames(), vec![Rect::new(0.0, 98.0, 270.0, 44.0)]);
        assert!(layout.action_separator_frames().is_empty());
    }

    #[test]
    fn test_force_stacked_actions() {
        let engine = AlertLayoutEngine::new(LayoutOptions {
            force_stacked_actions: true,
            ..Default::default()
        });
        let layout = engine.compute(&content(None, &["A", "B2"]), 400.0, &fixed);
        assert_eq!(layout.mode, ActionLayoutMode::Stacked);
        assert_eq!(layout.actions_height(), 88.0);
    }

    #[test]
    fn test_narrow_width_clamps() {
        let engine = AlertLayoutEngine::default();
        let layout = engine.compute(&content(None, &["A", "B2"]), 200.0, &fixed);
        assert_eq!(layout.content_size.width, 200.0);
        let total: f64 = layout.action_frames().iter().map(|f| f.width).sum();
        assert_eq!(total, 200.0);
    }

    #[test]
    fn test_tiny_width_keeps_text_inside() {
        let engine = AlertLayoutEngine::default();
        let content = DialogContent::new(
            "Giveaway Results",
            "Some long giveaway body text here",
            Some("Some winners could not be reached".to_string()),
            vec![ActionSpec::inert("OK", ActionStyle::Default)],
        )
        .unwrap();
        let layout = engine.compute(&content, 30.0, &EstimatingMeasurer::default());

        assert_eq!(layout.content_size.width, 30.0);
        for id in [ElementId::Title, ElementId::Body, ElementId::Warning] {
            let frame = layout.frame(id).unwrap();
            assert!(frame.x >= 0.0 && frame.right() <= 30.0, "{:?} overflows: {:?}", id, frame);
        }
    }

    #[test]
    fn test_degenerate_measurer_is_absorbed() {
        let engine = AlertLayoutEngine::default();
        let nan = |_: &AttributedText, _: Size| Size::new(f64::NAN, f64::INFINITY);
        let layout = engine.compute(&content(Some("Warning"), &["A"]), 400.0, &nan);
        assert_eq!(layout.frame(ElementId::Title).unwrap().size(), Size::ZERO);
        assert_eq!(layout.content_size, Size::new(270.0, 8.0 + 44.0 + 26.0 + 36.0));
    }

    #[test]
    fn test_link_styles_pass_through() {
        let engine = AlertLayoutEngine::default();
        let content = DialogContent::new(
            "T",
            "[B](https://example.com)",
            None,
            vec![ActionSpec::inert("A", ActionStyle::Default)],
        )
        .unwrap();
        let layout = engine.compute(&content, 400.0, &fixed);
        // the link label measures like the plain body "B"
        assert_eq!(layout.frame(ElementId::Body).unwrap().size(), Size::new(100.0, 32.0));
    }

    fn sized_measurer(labels: Vec<(f64, f64)>) -> impl Fn(&AttributedText, Size) -> Size {
        move |text: &AttributedText, _constraint: Size| {
            let s = text.string();
            match s.strip_prefix("label") {
                Some(index) => {
                    let (width, height) = labels[index.parse::<usize>().unwrap_or(0)];
                    Size::new(width, height)
                }
                None => Size::new(s.len() as f64 * 7.0, 18.0),
            }
        }
    }

    fn labelled_content(count: usize) -> DialogContent {
        let actions = (0..count)
            .map(|i| ActionSpec::inert(format!("label{}", i), ActionStyle::Generic))
            .collect();
        DialogContent::new("Giveaway", "Body text", None, actions).unwrap()
    }

    proptest! {
        #[test]
        fn prop_row_widths_sum_to_dialog_width(
            labels in prop::collection::vec((1.0f64..60.0, 1.0f64..29.0), 1..6),
            available in 100.0f64..500.0,
        ) {
            let count = labels.len();
            let measurer = sized_measurer(labels);
            let layout = AlertLayoutEngine::default().compute(&labelled_content(count), available, &measurer);

            prop_assert_eq!(layout.mode, ActionLayoutMode::Row);
            let frames = layout.action_frames();
            let width = layout.content_size.width;
            let others: f64 = frames[..count - 1].iter().map(|f| f.width).sum();
            prop_assert_eq!(frames[count - 1].width, width - others);
            for frame in &frames {
                prop_assert_eq!(frame.height, 44.0);
            }
        }

        #[test]
        fn prop_any_wrapped_label_stacks_everything(
            labels in prop::collection::vec((1.0f64..60.0, 1.0f64..29.0), 1..6),
            wrapped in 0usize..6,
            available in 100.0f64..500.0,
        ) {
            let mut labels = labels;
            let wrapped = wrapped % labels.len();
            labels[wrapped].1 = 40.0;
            let count = labels.len();
            let measurer = sized_measurer(labels);
            let layout = AlertLayoutEngine::default().compute(&labelled_content(count), available, &measurer);

            prop_assert_eq!(layout.mode, ActionLayoutMode::Stacked);
            let frames = layout.action_frames();
            for pair in frames.windows(2) {
                prop_assert_eq!(pair[0].bottom(), pair[1].y);
            }
            for frame in &frames {
                prop_assert_eq!(frame.width, layout.content_size.width);
                prop_assert_eq!(frame.height, 44.0);
            }
            prop_assert_eq!(frames[count - 1].bottom(), layout.content_size.height);
        }

        #[test]
        fn prop_width_bounds(available in 0.0f64..1000.0, count in 1usize..5) {
            let measurer = sized_measurer(vec![(30.0, 20.0); count]);
            let layout = AlertLayoutEngine::default().compute(&labelled_content(count), available, &measurer);
            prop_assert!(layout.content_size.width <= available.min(270.0));
            if available >= 270.0 {
                prop_assert_eq!(layout.content_size.width, 270.0);
            }
        }

        #[test]
        fn prop_layout_is_deterministic(available in 0.0f64..600.0, count in 1usize..5) {
            let measurer = sized_measurer(vec![(50.0, 20.0); count]);
            let engine = AlertLayoutEngine::default();
            let content = labelled_content(count);
            let first = engine.compute(&content, available, &measurer);
            let second = engine.compute(&content, available, &measurer);
            prop_assert_eq!(first, second);
        }
    }
}
