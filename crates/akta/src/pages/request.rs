use eframe::egui;

use crate::state::RequestPageState;
use crate::ui;

const URGENCY_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

pub fn render(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut RequestPageState) {
    ui::styled_heading(ui, "Request Vaccine");
    ui.add_space(10.0);

    egui::Grid::new("request_form")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            ui.label("Vaccine type");
            ui.text_edit_singleline(&mut state.form.vaccine_type);
            ui.end_row();

            ui.label("Urgency");
            ui.horizontal(|ui| {
                for level in URGENCY_LEVELS {
                    ui.selectable_value(&mut state.form.urgency, level.to_owned(), level);
                }
            });
            ui.end_row();
        });

    ui.add_space(10.0);
    let ready = !state.form.vaccine_type.is_empty() && !state.form.urgency.is_empty();
    if ui.add_enabled(ready, egui::Button::new("Submit Request")).clicked() {
        state.confirm_open = true;
    }

    if let Some(message) = &state.submitted {
        ui.add_space(10.0);
        ui::success_message(ui, message);
    }

    render_confirm_modal(ctx, state);
}

fn render_confirm_modal(ctx: &egui::Context, state: &mut RequestPageState) {
    if !state.confirm_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Confirm Request")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(state.form.summary());
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    // See VaccineRequest: submission is a log line only.
                    let message = state.form.summary();
                    tracing::info!("{message}");
                    state.submitted = Some(message);
                    state.form = Default::default();
                    state.confirm_open = false;
                }
                if ui.button("Cancel").clicked() {
                    state.confirm_open = false;
                }
            });
        });
    if !open {
        state.confirm_open = false;
    }
}
