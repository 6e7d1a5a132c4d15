use eframe::egui;

use crate::state::{adjusted_price, PricingPageState, PRICING_PLANS};
use crate::ui;

pub fn render(ui: &mut egui::Ui, state: &mut PricingPageState) {
    ui::styled_heading(ui, "Pricing Plans");
    ui.label(
        "Choose the perfect plan for your needs. Unlock premium features and \
         scale your business with our flexible pricing options.",
    );
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label("Monthly");
        let label = if state.yearly { "Yearly" } else { "Monthly" };
        ui.toggle_value(&mut state.yearly, label);
        ui.label("Yearly");
    });
    ui.add_space(15.0);

    ui.horizontal_top(|ui| {
        for plan in PRICING_PLANS {
            ui.group(|ui| {
                ui.set_width(170.0);
                ui.vertical(|ui| {
                    if plan.is_popular {
                        ui.label(
                            egui::RichText::new("Most Popular")
                                .small()
                                .color(egui::Color32::from_rgb(0, 82, 78)),
                        );
                    }
                    ui.label(egui::RichText::new(plan.name).strong());
                    let price = adjusted_price(plan.monthly_price, state.yearly);
                    let period = if state.yearly { "year" } else { "month" };
                    ui.label(
                        egui::RichText::new(format!("${price}/{period}")).size(20.0),
                    );
                    ui.add_space(5.0);
                    for feature in plan.features {
                        ui.label(format!("{}× {}", feature.quantity, feature.name));
                    }
                    ui.add_space(5.0);
                    let _ = ui.button("Choose Plan");
                });
            });
        }
    });
}
