//! The shared wallet affordance rendered in every page's header.

use eframe::egui;

use akta_session_core::{truncate_text, WalletSession};

/// What the user asked the wallet panel to do this frame. The app applies
/// the action against the shared session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    Connect,
    Disconnect,
    CopyAddress,
    OpenExplorer,
}

/// Characters of the address shown before truncation kicks in.
const ADDRESS_DISPLAY_LEN: usize = 12;

pub fn render(ui: &mut egui::Ui, session: &WalletSession) -> Option<WalletAction> {
    let mut action = None;

    match &session.account {
        None => {
            if ui.button("💳 Connect Wallet").clicked() {
                action = Some(WalletAction::Connect);
            }
        }
        Some(address) => {
            ui.label(
                egui::RichText::new(truncate_text(address.as_str(), ADDRESS_DISPLAY_LEN))
                    .monospace(),
            );
            match session.display_balance() {
                Some(balance) => {
                    ui.label(format!("{balance:.3} ALGO"));
                }
                None => {
                    ui.spinner();
                }
            }
            if ui.small_button("📋").on_hover_text("Copy address").clicked() {
                action = Some(WalletAction::CopyAddress);
            }
            if ui.small_button("🔗").on_hover_text("View on explorer").clicked() {
                action = Some(WalletAction::OpenExplorer);
            }
            if ui.button("Disconnect").clicked() {
                action = Some(WalletAction::Disconnect);
            }
        }
    }

    action
}
