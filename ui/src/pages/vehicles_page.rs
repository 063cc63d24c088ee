//! The customer's vehicle list.

use autobase_business::VehiclesLoad;
use egui::{Response, RichText, Ui};

use crate::state::State;
use crate::widgets::{self, COLOR_RED};

pub fn vehicles_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("My Vehicles");
            if ui.button("\u{1F504} Refresh").clicked() {
                state.vehicles.start(&state.config, ui.ctx());
            }
        });
        ui.add_space(12.0);

        match &state.vehicles.load {
            VehiclesLoad::Idle => {}
            VehiclesLoad::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading your vehicles...");
                });
            }
            VehiclesLoad::Empty => {
                ui.label(RichText::new("No Vehicles Found").strong());
                ui.label("You currently don't have any vehicles.");
            }
            VehiclesLoad::Failed(error) => {
                ui.colored_label(COLOR_RED, format!("Failed to load vehicles: {error}"));
            }
            VehiclesLoad::Loaded(vehicles) => {
                for vehicle in vehicles {
                    widgets::vehicle_card(vehicle, ui);
                    ui.add_space(8.0);
                }
            }
        }
    })
    .response
}

#[cfg(test)]
mod vehicles_page_tests {
    use autobase_business::{Vehicle, VehiclesLoad};
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;

    fn harness_for(load: VehiclesLoad) -> Harness<'static, State> {
        let mut state = State::default();
        state.vehicles.load = load;
        Harness::new_ui_state(
            |ui, state| {
                super::vehicles_page(state, ui);
            },
            state,
        )
    }

    #[test]
    fn test_empty_garage_is_not_an_error() {
        let harness = harness_for(VehiclesLoad::Empty);

        assert!(harness.query_by_label_contains("No Vehicles Found").is_some());
        assert!(
            harness
                .query_by_label_contains("don't have any vehicles")
                .is_some()
        );
        assert!(
            harness.query_by_label_contains("Failed").is_none(),
            "an empty garage must not read like a failure"
        );
    }

    #[test]
    fn test_each_vehicle_gets_a_card() {
        let harness = harness_for(VehiclesLoad::Loaded(vec![
            Vehicle {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2019,
                vin: "JT2AE09W1P0038539".to_string(),
                color: "Blue".to_string(),
                mileage: Some(42_000),
            },
            Vehicle {
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2022,
                vin: "2HGFC2F59NH000001".to_string(),
                color: "Red".to_string(),
                mileage: None,
            },
        ]));

        assert!(harness.query_by_label_contains("Toyota Corolla").is_some());
        assert!(harness.query_by_label_contains("Honda Civic").is_some());
    }
}
