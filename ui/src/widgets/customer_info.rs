//! Customer profile card.

use autobase_business::CustomerInfoLoad;
use egui::Ui;

use super::COLOR_RED;

pub fn customer_info_card(load: &CustomerInfoLoad, ui: &mut Ui) {
    match load {
        CustomerInfoLoad::Idle => {}
        CustomerInfoLoad::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading your details...");
            });
        }
        CustomerInfoLoad::Failed(error) => {
            ui.colored_label(COLOR_RED, format!("Failed to load customer info: {error}"));
        }
        CustomerInfoLoad::Loaded(rows) => {
            egui::Grid::new("customer_info")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in rows {
                        ui.strong(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
        }
    }
}
