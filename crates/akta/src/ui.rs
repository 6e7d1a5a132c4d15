//! UI helper components shared across pages.

use eframe::egui;

pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(
        egui::RichText::new(text)
            .size(22.0)
            .color(egui::Color32::from_rgb(0, 82, 78)),
    );
}

pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(16.0).strong());
    ui.separator();
}

pub fn error_message(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(format!("❌ {text}")).color(egui::Color32::from_rgb(220, 80, 80)));
}

pub fn notice_message(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(format!("⚠ {text}")).color(egui::Color32::from_rgb(220, 180, 50)),
    );
}

pub fn success_message(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(format!("✔ {text}")).color(egui::Color32::from_rgb(0, 180, 120)));
}

pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text.to_owned()) {
                tracing::warn!("clipboard write failed: {e}");
            }
        }
        Err(e) => tracing::warn!("clipboard unavailable: {e}"),
    }
}

pub fn explorer_address_url(explorer_base_url: &str, address: &str) -> String {
    format!("{}/address/{}", explorer_base_url.trim_end_matches('/'), address)
}

pub fn open_url_new_tab(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("failed to open {url}: {e}");
    }
}
