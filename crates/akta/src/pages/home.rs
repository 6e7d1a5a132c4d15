use eframe::egui;

use akta_session_core::IdentityProviderKind;

use crate::state::HomePageState;
use crate::ui;

/// Identity actions raised by the home page; the app runs them against
/// the identity adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    SignIn(IdentityProviderKind),
    SignOut,
}

pub fn render(ui: &mut egui::Ui, state: &mut HomePageState) -> Option<HomeAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(
            egui::RichText::new("Welcome to äkta Vaccination Clinic")
                .size(32.0)
                .strong(),
        );
        ui.add_space(10.0);
        ui.label(
            "Our decentralized platform ensures secure and efficient vaccine \
             administration. Connect your wallet to get started.",
        );
        ui.add_space(20.0);
        let _ = ui.button("Learn More");
    });

    ui.add_space(40.0);
    ui::section_header(ui, "Account");

    match &state.profile {
        Some(profile) => {
            egui::Grid::new("identity_profile")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.label(&profile.name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.label(&profile.email);
                    ui.end_row();
                });
            ui.add_space(5.0);
            if ui.button("Sign out").clicked() {
                action = Some(HomeAction::SignOut);
            }
        }
        None => {
            ui.horizontal(|ui| {
                if ui.button("Sign in with Google").clicked() {
                    action = Some(HomeAction::SignIn(IdentityProviderKind::Google));
                }
                if ui.button("Sign in with Email").clicked() {
                    action = Some(HomeAction::SignIn(IdentityProviderKind::Email));
                }
            });
        }
    }

    if let Some(error) = &state.identity_error {
        ui.add_space(5.0);
        ui::error_message(ui, error);
    }

    action
}
