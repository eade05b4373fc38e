use crate::host::{Notification, RecordingNavigator, TerminalNotifier};

use pf_core::Route;
use pf_profile::{Navigator, Notifier};

use googletest::prelude::*;

#[test]
fn given_navigations_when_recorded_then_kept_in_order() {
    let navigator = RecordingNavigator::default();

    navigator.navigate(Route::Interest);
    navigator.navigate(Route::Root);

    assert_that!(navigator.routes(), eq(&vec![Route::Interest, Route::Root]));
}

#[test]
fn given_quiet_notifier_when_notified_then_kept() {
    let notifier = TerminalNotifier::quiet();

    notifier.success("saved");
    notifier.error("failed");

    assert_that!(
        notifier.sent(),
        eq(&vec![
            Notification::Success("saved".to_string()),
            Notification::Error("failed".to_string()),
        ])
    );
}

#[test]
fn given_notification_when_serialized_then_tagged() {
    let json = serde_json::to_value(Notification::Error("failed".to_string())).unwrap();

    assert_that!(
        json,
        eq(&serde_json::json!({ "kind": "error", "message": "failed" }))
    );
}
