//! äkta: vaccine distribution demo clinic GUI.

use eframe::egui;

mod app;
mod pages;
mod state;
mod ui;
mod wallet_panel;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting äkta");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("äkta")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "äkta",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
