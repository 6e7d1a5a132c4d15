use eframe::egui;

use crate::state::AdministerPageState;
use crate::ui;

pub fn render(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut AdministerPageState) {
    ui::styled_heading(ui, "Administer Vaccine");
    ui.add_space(10.0);

    egui::Grid::new("administer_inventory")
        .num_columns(5)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Vaccine").strong());
            ui.label(egui::RichText::new("Manufacturer").strong());
            ui.label(egui::RichText::new("Quantity").strong());
            ui.label(egui::RichText::new("Expires").strong());
            ui.label("");
            ui.end_row();

            for record in state.inventory.records().to_vec() {
                ui.label(&record.name);
                ui.label(&record.manufacturer);
                ui.label(record.quantity.to_string());
                ui.label(&record.expiration_date);
                let use_button =
                    ui.add_enabled(record.quantity > 0, egui::Button::new("Use"));
                if use_button.clicked() {
                    state.pending_use = Some(record.id);
                }
                ui.end_row();
            }
        });

    render_use_modal(ctx, state);
}

fn render_use_modal(ctx: &egui::Context, state: &mut AdministerPageState) {
    let Some(id) = state.pending_use else {
        return;
    };
    let Some(record) = state.inventory.get(id) else {
        state.pending_use = None;
        return;
    };
    let name = record.name.clone();

    let mut open = true;
    egui::Window::new("Confirm Administration")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!("Administer one dose of {name}?"));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    match state.inventory.use_dose(id) {
                        Ok(remaining) => {
                            tracing::info!(vaccine = %name, remaining, "dose administered")
                        }
                        Err(err) => tracing::warn!(%err, "dose not administered"),
                    }
                    state.pending_use = None;
                }
                if ui.button("Cancel").clicked() {
                    state.pending_use = None;
                }
            });
        });
    if !open {
        state.pending_use = None;
    }
}
