//! Dialog content model.
//!
//! A [`DialogContent`] is built once per presentation and never mutated.

use std::fmt;
use std::rc::Rc;

use crate::errors::ContentError;

/// Visual role of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionStyle {
    /// Ordinary action.
    #[default]
    Generic,
    /// The preferred action, drawn with a heavier label.
    Default,
    /// An action that destroys or discards something.
    Destructive,
    /// Dismisses the alert without doing anything.
    Cancel,
}

/// An action button: label, style, and the handler run when it is pressed.
#[derive(Clone)]
pub struct ActionSpec {
    pub label: String,
    pub style: ActionStyle,
    on_invoke: Rc<dyn Fn()>,
}

impl ActionSpec {
    pub fn new(label: impl Into<String>, style: ActionStyle, on_invoke: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            style,
            on_invoke: Rc::new(on_invoke),
        }
    }

    /// An action whose handler does nothing.
    pub fn inert(label: impl Into<String>, style: ActionStyle) -> Self {
        Self::new(label, style, || {})
    }

    pub fn invoke(&self) {
        (self.on_invoke)();
    }
}

impl fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSpec")
            .field("label", &self.label)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Everything an alert displays.
#[derive(Debug, Clone)]
pub struct DialogContent {
    title: String,
    body_markdown: String,
    warning: Option<String>,
    actions: Vec<ActionSpec>,
}

impl DialogContent {
    /// Build content; at least one action is required.
    pub fn new(
        title: impl Into<String>,
        body_markdown: impl Into<String>,
        warning: Option<String>,
        actions: Vec<ActionSpec>,
    ) -> Result<Self, ContentError> {
        if actions.is_empty() {
            return Err(ContentError::NoActions);
        }
        Ok(Self {
            title: title.into(),
            body_markdown: body_markdown.into(),
            warning,
            actions,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body_markdown(&self) -> &str {
        &self.body_markdown
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Non-empty, in display order.
    pub fn actions(&self) -> &[ActionSpec] {
        &self.actions
    }
}
