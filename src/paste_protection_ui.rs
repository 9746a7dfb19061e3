//! Paste protection confirmation dialog.
//!
//! Shown when the caller has decided that clipboard text looks like it would
//! execute commands once pasted. The dialog displays the text and reports a
//! binary outcome, `Cancel` or `Paste`, to an optional delegate. Deciding
//! what counts as dangerous is the caller's job.

use par_term_quick_config::QuickTerminalConfig;
use std::sync::{Arc, Weak};

/// Outcome of the paste protection dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteProtectionAction {
    /// User declined - drop the clipboard text
    Cancel,
    /// User confirmed - paste the text as-is
    Paste,
}

impl PasteProtectionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasteProtectionAction::Cancel => "cancel",
            PasteProtectionAction::Paste => "paste",
        }
    }
}

/// Receives the outcome of the paste protection dialog.
pub trait PasteProtectionDelegate {
    fn paste_protection_complete(&self, action: PasteProtectionAction);
}

/// State for the paste protection dialog.
///
/// The delegate is held weakly. If it was never set, or has been dropped, no
/// notification is delivered, so an owner that waits on the delegate never
/// learns the dialog finished.
///
/// Unlike a delegate-only dialog, which stays open until dismissed by other
/// means when nobody listens, this one always hides itself on Cancel or Paste
/// and returns the outcome from [`cancel`](Self::cancel),
/// [`confirm`](Self::confirm) and [`show`](Self::show), delegate or not.
pub struct PasteProtectionUI {
    /// Whether confirmation is required at all (`paste_protection` setting)
    enabled: bool,
    /// Whether the dialog is visible
    visible: bool,
    /// The clipboard text awaiting confirmation
    contents: String,
    /// Optional completion delegate
    delegate: Option<Weak<dyn PasteProtectionDelegate>>,
}

impl Default for PasteProtectionUI {
    fn default() -> Self {
        Self::new()
    }
}

impl PasteProtectionUI {
    /// Create a new, hidden paste protection dialog
    pub fn new() -> Self {
        Self {
            enabled: true,
            visible: false,
            contents: String::new(),
            delegate: None,
        }
    }

    /// Create a dialog honouring the `paste_protection` setting
    pub fn from_config(config: &QuickTerminalConfig) -> Self {
        Self {
            enabled: config.paste_protection,
            ..Self::new()
        }
    }

    /// Whether pastes are routed through the confirmation dialog
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register the delegate notified on completion
    pub fn set_delegate<D: PasteProtectionDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Remove the completion delegate
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Check if the dialog is currently visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The clipboard text currently awaiting confirmation
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Show the dialog for the given clipboard text.
    ///
    /// With paste protection disabled the dialog is skipped and the paste
    /// completes immediately, returning `Some(Paste)`. Otherwise the dialog
    /// opens and `None` is returned until the user decides.
    pub fn open(&mut self, contents: impl Into<String>) -> Option<PasteProtectionAction> {
        if !self.enabled {
            log::debug!("Paste protection disabled, pasting without confirmation");
            return Some(self.complete(PasteProtectionAction::Paste));
        }
        self.contents = contents.into();
        self.visible = true;
        log::info!(
            "Paste protection dialog opened ({} bytes)",
            self.contents.len()
        );
        None
    }

    /// Dismiss the dialog without pasting
    pub fn cancel(&mut self) -> PasteProtectionAction {
        self.complete(PasteProtectionAction::Cancel)
    }

    /// Confirm the paste
    pub fn confirm(&mut self) -> PasteProtectionAction {
        self.complete(PasteProtectionAction::Paste)
    }

    /// Hide the dialog and clear state
    fn hide(&mut self) {
        self.visible = false;
        self.contents.clear();
    }

    fn complete(&mut self, action: PasteProtectionAction) -> PasteProtectionAction {
        self.hide();
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => {
                log::debug!("Paste protection complete: {}", action.as_str());
                delegate.paste_protection_complete(action);
            }
            None => {
                log::debug!(
                    "Paste protection complete ({}) with no delegate attached",
                    action.as_str()
                );
            }
        }
        action
    }

    /// Render the dialog and return the outcome, if the user chose one this frame
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PasteProtectionAction> {
        if !self.visible {
            return None;
        }

        let mut action = None;

        egui::Window::new("Paste Protection")
            .collapsible(false)
            .resizable(true)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("⚠")
                            .color(egui::Color32::YELLOW)
                            .size(42.0),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        "Pasting this text to the terminal may be dangerous as it looks like \
                         some commands may be executed.",
                    );
                });
                ui.add_space(10.0);

                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut self.contents.as_str())
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    });
                ui.add_space(10.0);

                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            action = Some(PasteProtectionAction::Cancel);
                        }
                        ui.add_space(10.0);
                        if ui.button("Paste").clicked() {
                            action = Some(PasteProtectionAction::Paste);
                        }
                    });
                });
                ui.add_space(6.0);
            });

        // Escape cancels, Enter pastes
        if action.is_none() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                action = Some(PasteProtectionAction::Cancel);
            } else if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(PasteProtectionAction::Paste);
            }
        }

        action.map(|action| self.complete(action))
    }
}
