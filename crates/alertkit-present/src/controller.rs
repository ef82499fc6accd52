//! Alert chrome host and the giveaway info alert factory.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;

use alertkit_core::{ActionSpec, AlertTheme, ControllerError, DialogContent, Size};
use alertkit_layout::TextMeasurer;

use crate::content::{AlertContent, GiveawayInfoAlertContent};
use crate::stream::{Subscription, ThemeSource};

/// One presentation of an alert.
///
/// Owns the content, the current theme, and the theme subscription. Dismissal
/// releases the subscription and runs the `dismissed` callback, each exactly once.
/// A theme that arrives while the controller is borrowed is parked and applied
/// on the next layout or action.
pub struct AlertController<C: AlertContent> {
    theme: AlertTheme,
    pending_theme: Rc<Cell<Option<AlertTheme>>>,
    content: C,
    subscription: Option<Subscription>,
    dismissed: Option<Box<dyn FnOnce()>>,
    is_dismissed: bool,
}

impl<C: AlertContent> AlertController<C> {
    pub fn new(theme: AlertTheme, mut content: C) -> Self {
        content.update_theme(&theme);
        Self {
            theme,
            pending_theme: Rc::new(Cell::new(None)),
            content,
            subscription: None,
            dismissed: None,
            is_dismissed: false,
        }
    }

    pub fn theme(&self) -> &AlertTheme {
        &self.theme
    }

    /// Apply a new theme to the chrome and its content.
    pub fn set_theme(&mut self, theme: AlertTheme) {
        self.pending_theme.take();
        if self.is_dismissed {
            return;
        }
        self.content.update_theme(&theme);
        self.theme = theme;
    }

    /// Apply a theme parked while the controller was busy. Returns `true` if one was applied.
    pub fn apply_pending_theme(&mut self) -> bool {
        match self.pending_theme.take() {
            Some(theme) => {
                self.set_theme(theme);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_theme(&self) -> bool {
        let theme = self.pending_theme.take();
        let pending = theme.is_some();
        self.pending_theme.set(theme);
        pending
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Hold `subscription` until dismissal. A previously attached one is released.
    pub fn attach_subscription(&mut self, subscription: Subscription) {
        if let Some(mut previous) = self.subscription.replace(subscription) {
            previous.unsubscribe();
        }
    }

    pub fn has_subscription(&self) -> bool {
        self.subscription.as_ref().map_or(false, Subscription::is_active)
    }

    /// Register the callback run once on dismissal.
    pub fn on_dismissed(&mut self, callback: impl FnOnce() + 'static) {
        self.dismissed = Some(Box::new(callback));
    }

    /// Lay out the content within the container size.
    pub fn container_layout(&mut self, size: Size) -> Size {
        self.apply_pending_theme();
        self.content.update_layout(size)
    }

    pub fn is_dismissed(&self) -> bool {
        self.is_dismissed
    }

    /// Dismiss the alert. Returns `false` if it was already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if self.is_dismissed {
            return false;
        }
        self.is_dismissed = true;
        self.pending_theme.take();
        self.content.set_interactive(false);

        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        debug!("alert dismissed");

        if let Some(callback) = self.dismissed.take() {
            callback();
        }
        true
    }

    /// Handle a tap outside the alert. Returns `true` if it dismissed the alert.
    pub fn handle_outside_tap(&mut self) -> bool {
        if self.is_dismissed || !self.content.dismiss_on_outside_tap() {
            return false;
        }
        self.dismiss()
    }

    /// The action at `index`, if the alert currently accepts input.
    pub fn action(&self, index: usize) -> Result<ActionSpec, ControllerError> {
        if self.is_dismissed {
            return Err(ControllerError::Dismissed);
        }
        if !self.content.is_interactive() {
            return Err(ControllerError::NotInteractive);
        }
        let actions = self.content.actions();
        actions
            .get(index)
            .cloned()
            .ok_or(ControllerError::ActionOutOfRange {
                index,
                count: actions.len(),
            })
    }

    /// Run the handler of the action at `index`.
    pub fn invoke_action(&mut self, index: usize) -> Result<(), ControllerError> {
        let action = self.action(index)?;
        action.invoke();
        self.apply_pending_theme();
        Ok(())
    }
}

impl<C: AlertContent> Drop for AlertController<C> {
    fn drop(&mut self) {
        if !self.is_dismissed && self.has_subscription() {
            debug!("alert dropped while presented; releasing theme subscription");
        }
    }
}

impl<C: AlertContent> fmt::Debug for AlertController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertController")
            .field("theme", &self.theme.kind)
            .field("subscribed", &self.has_subscription())
            .field("dismissed", &self.is_dismissed)
            .finish_non_exhaustive()
    }
}

/// Shared handle to a presented alert.
pub type SharedAlertController<C> = Rc<RefCell<AlertController<C>>>;

/// Press an action on a shared controller.
///
/// The controller is not borrowed while the handler runs, so handlers may
/// dismiss the alert.
pub fn press_action<C: AlertContent>(
    controller: &SharedAlertController<C>,
    index: usize,
) -> Result<(), ControllerError> {
    let action = controller.borrow().action(index)?;
    action.invoke();
    if let Ok(mut controller) = controller.try_borrow_mut() {
        controller.apply_pending_theme();
    }
    Ok(())
}

/// Build a giveaway info alert that follows `source`'s theme until dismissed.
pub fn giveaway_info_alert_controller<S>(
    source: &S,
    measurer: Box<dyn TextMeasurer>,
    content: DialogContent,
) -> SharedAlertController<GiveawayInfoAlertContent>
where
    S: ThemeSource + ?Sized,
{
    let theme = source.current();
    let node = GiveawayInfoAlertContent::new(content, &theme, measurer);
    let controller = Rc::new(RefCell::new(AlertController::new(theme, node)));

    let weak = Rc::downgrade(&controller);
    let pending = Rc::clone(&controller.borrow().pending_theme);
    let subscription = source.subscribe(Box::new(move |theme: &AlertTheme| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        pending.set(Some(theme.clone()));
        match controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.apply_pending_theme();
            }
            Err(_) => debug!("alert busy; theme update parked"),
        };
    }));
    controller.borrow_mut().attach_subscription(subscription);

    controller
}
