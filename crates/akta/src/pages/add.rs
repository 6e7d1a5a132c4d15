use eframe::egui;

use akta_session_core::NewVaccine;

use crate::state::AddPageState;
use crate::ui;

pub fn render(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut AddPageState) {
    ui::styled_heading(ui, "Vaccine Inventory");
    ui.add_space(10.0);

    if ui.button("Add New Vaccine").clicked() {
        state.modal_open = true;
    }
    ui.add_space(10.0);

    egui::Grid::new("add_inventory")
        .num_columns(5)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Id").strong());
            ui.label(egui::RichText::new("Vaccine").strong());
            ui.label(egui::RichText::new("Manufacturer").strong());
            ui.label(egui::RichText::new("Quantity").strong());
            ui.label(egui::RichText::new("Expires").strong());
            ui.end_row();

            for record in state.inventory.records() {
                ui.label(record.id.to_string());
                ui.label(&record.name);
                ui.label(&record.manufacturer);
                ui.label(record.quantity.to_string());
                ui.label(&record.expiration_date);
                ui.end_row();
            }
        });

    render_add_modal(ctx, state);
}

fn render_add_modal(ctx: &egui::Context, state: &mut AddPageState) {
    if !state.modal_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Add New Vaccine")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("add_vaccine_form")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut state.name);
                    ui.end_row();

                    ui.label("Manufacturer");
                    ui.text_edit_singleline(&mut state.manufacturer);
                    ui.end_row();

                    ui.label("Quantity");
                    ui.text_edit_singleline(&mut state.quantity);
                    ui.end_row();

                    ui.label("Expiration date");
                    ui.text_edit_singleline(&mut state.expiration_date);
                    ui.end_row();
                });

            if let Some(err) = &state.form_error {
                ui.add_space(6.0);
                ui::error_message(ui, err);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Add Vaccine").clicked() {
                    submit(state);
                }
                if ui.button("Cancel").clicked() {
                    state.modal_open = false;
                    state.form_error = None;
                }
            });
        });
    if !open {
        state.modal_open = false;
        state.form_error = None;
    }
}

fn submit(state: &mut AddPageState) {
    if state.name.is_empty() || state.manufacturer.is_empty() || state.expiration_date.is_empty() {
        state.form_error = Some("All fields are required".to_owned());
        return;
    }
    let quantity = match state.quantity.trim().parse::<u32>() {
        Ok(q) => q,
        Err(_) => {
            state.form_error = Some("Quantity must be a whole number".to_owned());
            return;
        }
    };

    let id = state.inventory.add(NewVaccine {
        name: std::mem::take(&mut state.name),
        manufacturer: std::mem::take(&mut state.manufacturer),
        quantity,
        expiration_date: std::mem::take(&mut state.expiration_date),
    });
    tracing::info!(id, "vaccine added to inventory");
    state.quantity.clear();
    state.form_error = None;
    state.modal_open = false;
}
