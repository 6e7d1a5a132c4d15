use eframe::egui;

use crate::state::StockPageState;
use crate::ui;

pub fn render(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut StockPageState) {
    ui::styled_heading(ui, "Vaccine Stock");
    ui.add_space(10.0);

    for holder in state.ledger.holders().to_vec() {
        ui::section_header(ui, &holder.name);
        egui::Grid::new(format!("stock_{}", holder.id))
            .num_columns(3)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Vaccine").strong());
                ui.label(egui::RichText::new("Quantity").strong());
                ui.label("");
                ui.end_row();

                for item in &holder.stock {
                    ui.label(&item.name);
                    ui.label(item.quantity.to_string());
                    if ui.button("Request").clicked() {
                        state.pending_request = Some((holder.id, item.id));
                    }
                    ui.end_row();
                }
            });
        ui.add_space(10.0);
    }

    if let Some(message) = &state.last_request {
        ui::success_message(ui, message);
    }

    render_request_modal(ctx, state);
}

fn render_request_modal(ctx: &egui::Context, state: &mut StockPageState) {
    let Some((holder_id, item_id)) = state.pending_request else {
        return;
    };
    let Some((holder, item)) = state.ledger.find(holder_id, item_id) else {
        state.pending_request = None;
        return;
    };
    let holder_name = holder.name.clone();
    let item_name = item.name.clone();

    let mut open = true;
    egui::Window::new("Confirm Vaccine Request")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!(
                "Request {item_name} from {holder_name}?"
            ));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    // No backend contract exists; the submission is a log line.
                    let message = format!("Requesting {item_name} from {holder_name}");
                    tracing::info!("{message}");
                    state.last_request = Some(message);
                    state.pending_request = None;
                }
                if ui.button("Cancel").clicked() {
                    state.pending_request = None;
                }
            });
        });
    if !open {
        state.pending_request = None;
    }
}
