//! One vehicle as a card.

use autobase_business::Vehicle;
use autobase_utils::format_mileage;
use egui::{RichText, Ui};

pub fn vehicle_card(vehicle: &Vehicle, ui: &mut Ui) {
    ui.group(|ui| {
        ui.heading(format!("{} {}", vehicle.make, vehicle.model));
        ui.label(RichText::new(vehicle.year.to_string()).weak());
        ui.separator();
        ui.label(format!("VIN: {}", vehicle.vin));
        ui.label(format!("Color: {}", vehicle.color));
        ui.label(format!("Mileage: {}", format_mileage(vehicle.mileage)));
    });
}
