//! Presentation life cycle of the giveaway info alert.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alertkit_core::{ActionSpec, ActionStyle, AlertTheme, AttributedText, DialogContent, Size, ThemeKind};
use alertkit_layout::{ActionLayoutMode, ElementId, EstimatingMeasurer};
use alertkit_present::{
    giveaway_info_alert_controller, press_action, AlertContent, Subscription, ThemeCallback,
    ThemeSource, ThemeStream,
};
use proptest::prelude::*;

/// Theme source that counts subscriptions and releases.
struct CountingSource {
    theme: AlertTheme,
    callbacks: Rc<RefCell<Vec<ThemeCallback>>>,
    subscribed: Cell<usize>,
    released: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            theme: AlertTheme::light(),
            callbacks: Rc::new(RefCell::new(Vec::new())),
            subscribed: Cell::new(0),
            released: Rc::new(Cell::new(0)),
        }
    }

    fn push(&self, theme: &AlertTheme) {
        for callback in self.callbacks.borrow_mut().iter_mut() {
            callback(theme);
        }
    }
}

impl ThemeSource for CountingSource {
    fn current(&self) -> AlertTheme {
        self.theme.clone()
    }

    fn subscribe(&self, on_update: ThemeCallback) -> Subscription {
        self.subscribed.set(self.subscribed.get() + 1);
        self.callbacks.borrow_mut().push(on_update);
        let released = Rc::clone(&self.released);
        let callbacks = Rc::clone(&self.callbacks);
        Subscription::new(move || {
            released.set(released.get() + 1);
            callbacks.borrow_mut().clear();
        })
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn giveaway_content(warning: Option<&str>) -> DialogContent {
    DialogContent::new(
        "Giveaway Results",
        "The giveaway is over. **3 winners** received their prizes. See the [rules](https://example.com).",
        warning.map(String::from),
        vec![
            ActionSpec::inert("Learn More", ActionStyle::Generic),
            ActionSpec::inert("OK", ActionStyle::Default),
        ],
    )
    .unwrap()
}

#[test]
fn test_full_presentation() {
    init_logging();
    let stream = ThemeStream::new(AlertTheme::light());
    let alert = giveaway_info_alert_controller(
        &stream,
        Box::new(EstimatingMeasurer::default()),
        giveaway_content(Some("Some winners could not be reached.")),
    );
    let dismissed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&dismissed);
    alert.borrow_mut().on_dismissed(move || counter.set(counter.get() + 1));

    let size = alert.borrow_mut().container_layout(Size::new(390.0, 844.0));
    assert_eq!(size.width, 270.0);
    {
        let alert = alert.borrow();
        let layout = alert.content().layout().unwrap();
        assert_eq!(layout.mode, ActionLayoutMode::Row);
        let warning = layout.frame(ElementId::Warning).unwrap();
        let background = layout.frame(ElementId::WarningBackground).unwrap();
        assert_eq!(background, warning.expand(8.0, 8.0));
        assert_eq!(layout.frame(ElementId::Action(1)).unwrap().right(), 270.0);
    }

    stream.publish(AlertTheme::dark());
    {
        let alert = alert.borrow();
        assert_eq!(alert.theme().kind, ThemeKind::Dark);
        assert_eq!(alert.content().layout_passes(), 2);
        assert_eq!(alert.content().layout().unwrap().content_size, size);
    }

    assert!(alert.borrow_mut().dismiss());
    assert!(!alert.borrow_mut().dismiss());
    assert_eq!(dismissed.get(), 1);
    assert_eq!(stream.subscriber_count(), 0);
    assert!(!alert.borrow().content().dismiss_on_outside_tap());
}

#[test]
fn test_release_without_updates() {
    let source = CountingSource::new();
    let alert = giveaway_info_alert_controller(&source, Box::new(EstimatingMeasurer::default()), giveaway_content(None));
    assert_eq!(source.subscribed.get(), 1);
    alert.borrow_mut().dismiss();
    assert_eq!(source.released.get(), 1);
    drop(alert);
    assert_eq!(source.released.get(), 1);
}

#[test]
fn test_drop_without_dismiss_releases() {
    let source = CountingSource::new();
    let alert = giveaway_info_alert_controller(&source, Box::new(EstimatingMeasurer::default()), giveaway_content(None));
    drop(alert);
    assert_eq!(source.released.get(), 1);
}

#[test]
fn test_action_dismisses_alert() {
    let stream = ThemeStream::new(AlertTheme::light());
    let dismiss_requests = Rc::new(Cell::new(0));
    let counter = Rc::clone(&dismiss_requests);
    let content = DialogContent::new(
        "Giveaway",
        "Body",
        None,
        vec![ActionSpec::new("OK", ActionStyle::Default, move || counter.set(counter.get() + 1))],
    )
    .unwrap();
    let alert = giveaway_info_alert_controller(&stream, Box::new(EstimatingMeasurer::default()), content);

    press_action(&alert, 0).unwrap();
    assert_eq!(dismiss_requests.get(), 1);
    alert.borrow_mut().dismiss();
    assert!(press_action(&alert, 0).is_err());
}

#[test]
fn test_wrapped_label_stacks_in_presented_alert() {
    let stream = ThemeStream::new(AlertTheme::light());
    let measurer = |text: &AttributedText, _: Size| {
        let height = if text.string() == "Share Results" { 40.0 } else { 20.0 };
        Size::new(60.0, height)
    };
    let alert = giveaway_info_alert_controller(
        &stream,
        Box::new(measurer),
        DialogContent::new(
            "Giveaway",
            "Body",
            None,
            vec![
                ActionSpec::inert("Share Results", ActionStyle::Generic),
                ActionSpec::inert("Close", ActionStyle::Cancel),
            ],
        )
        .unwrap(),
    );
    let size = alert.borrow_mut().container_layout(Size::new(320.0, 568.0));
    assert_eq!(size.height, 20.0 + 20.0 + 8.0 + 88.0 + 36.0);
    let alert = alert.borrow();
    let layout = alert.content().layout().unwrap();
    assert_eq!(layout.mode, ActionLayoutMode::Stacked);
    assert_eq!(layout.action_frames().len(), 2);
}

proptest! {
    #[test]
    fn prop_subscription_released_exactly_once(updates in 0usize..12) {
        let source = CountingSource::new();
        let alert = giveaway_info_alert_controller(
            &source,
            Box::new(EstimatingMeasurer::default()),
            giveaway_content(None),
        );
        alert.borrow_mut().container_layout(Size::new(375.0, 667.0));

        for i in 0..updates {
            let theme = if i % 2 == 0 { AlertTheme::dark() } else { AlertTheme::light() };
            source.push(&theme);
        }
        prop_assert_eq!(alert.borrow().content().layout_passes(), updates + 1);

        alert.borrow_mut().dismiss();
        alert.borrow_mut().dismiss();
        drop(alert);
        prop_assert_eq!(source.subscribed.get(), 1);
        prop_assert_eq!(source.released.get(), 1);
    }
}
