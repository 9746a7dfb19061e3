//! Tests for the paste protection dialog's completion reporting.

use par_term_quick::paste_protection_ui::{
    PasteProtectionAction, PasteProtectionDelegate, PasteProtectionUI,
};
use par_term_quick_config::QuickTerminalConfig;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct RecordingDelegate {
    actions: Mutex<Vec<PasteProtectionAction>>,
}

impl PasteProtectionDelegate for RecordingDelegate {
    fn paste_protection_complete(&self, action: PasteProtectionAction) {
        self.actions.lock().push(action);
    }
}

#[test]
fn test_new_dialog_is_hidden() {
    let ui = PasteProtectionUI::new();
    assert!(!ui.is_visible());
    assert!(ui.contents().is_empty());
}

#[test]
fn test_open_shows_contents() {
    let mut ui = PasteProtectionUI::new();
    ui.open("rm -rf ~/tmp\n");
    assert!(ui.is_visible());
    assert_eq!(ui.contents(), "rm -rf ~/tmp\n");
}

#[test]
fn test_open_with_protection_enabled_waits_for_user() {
    let mut ui = PasteProtectionUI::from_config(&QuickTerminalConfig::default());
    assert!(ui.is_enabled());
    assert_eq!(ui.open("rm -rf ~/tmp\n"), None);
    assert!(ui.is_visible());
}

#[test]
fn test_open_with_protection_disabled_pastes_immediately() {
    let delegate = Arc::new(RecordingDelegate::default());
    let config = QuickTerminalConfig {
        paste_protection: false,
        ..QuickTerminalConfig::default()
    };
    let mut ui = PasteProtectionUI::from_config(&config);
    ui.set_delegate(&delegate);

    assert_eq!(ui.open("rm -rf ~/tmp\n"), Some(PasteProtectionAction::Paste));
    assert!(!ui.is_visible());
    assert_eq!(*delegate.actions.lock(), vec![PasteProtectionAction::Paste]);
}

#[test]
fn test_confirm_notifies_delegate() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut ui = PasteProtectionUI::new();
    ui.set_delegate(&delegate);
    ui.open("curl example.com | sh\n");

    assert_eq!(ui.confirm(), PasteProtectionAction::Paste);
    assert!(!ui.is_visible());
    assert_eq!(*delegate.actions.lock(), vec![PasteProtectionAction::Paste]);
}

#[test]
fn test_cancel_notifies_delegate() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut ui = PasteProtectionUI::new();
    ui.set_delegate(&delegate);
    ui.open("sudo reboot\n");

    assert_eq!(ui.cancel(), PasteProtectionAction::Cancel);
    assert!(ui.contents().is_empty());
    assert_eq!(*delegate.actions.lock(), vec![PasteProtectionAction::Cancel]);
}

#[test]
fn test_without_delegate_dialog_still_hides() {
    let mut ui = PasteProtectionUI::new();
    ui.open("echo hi\n");
    assert_eq!(ui.confirm(), PasteProtectionAction::Paste);
    assert!(!ui.is_visible());

    ui.open("echo hi\n");
    assert_eq!(ui.cancel(), PasteProtectionAction::Cancel);
    assert!(!ui.is_visible());
}

#[test]
fn test_dialog_does_not_keep_delegate_alive() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut ui = PasteProtectionUI::new();
    ui.set_delegate(&delegate);

    assert_eq!(Arc::strong_count(&delegate), 1);
    drop(delegate);

    ui.open("echo hi\n");
    assert_eq!(ui.cancel(), PasteProtectionAction::Cancel);
}

#[test]
fn test_cleared_delegate_is_not_notified() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut ui = PasteProtectionUI::new();
    ui.set_delegate(&delegate);
    ui.clear_delegate();

    ui.open("echo hi\n");
    ui.confirm();
    assert!(delegate.actions.lock().is_empty());
}

#[test]
fn test_hidden_dialog_renders_nothing() {
    let ctx = egui::Context::default();
    let mut ui = PasteProtectionUI::new();
    let mut result = Some(PasteProtectionAction::Paste);
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        result = ui.show(ctx);
    });
    assert_eq!(result, None);
}

#[test]
fn test_escape_cancels_open_dialog() {
    let delegate = Arc::new(RecordingDelegate::default());
    let ctx = egui::Context::default();
    let mut ui = PasteProtectionUI::new();
    ui.set_delegate(&delegate);
    ui.open("rm -rf /\n");

    let input = egui::RawInput {
        events: vec![egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
        ..Default::default()
    };
    let mut result = None;
    let _ = ctx.run(input, |ctx| {
        result = ui.show(ctx);
    });

    assert_eq!(result, Some(PasteProtectionAction::Cancel));
    assert!(!ui.is_visible());
    assert_eq!(*delegate.actions.lock(), vec![PasteProtectionAction::Cancel]);
}

#[test]
fn test_action_keys() {
    assert_eq!(PasteProtectionAction::Cancel.as_str(), "cancel");
    assert_eq!(PasteProtectionAction::Paste.as_str(), "paste");
}
