//! The employee dashboard: table selector, grid, and an HTML export.

use autobase_business::{TableLoad, TablesLoad, grid_to_html};
use egui::{Response, Ui};

use crate::state::State;
use crate::widgets::{self, COLOR_RED};

pub fn employee_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Employee Dashboard");
        ui.add_space(8.0);

        table_selector(state, ui);
        ui.add_space(12.0);
        widgets::table_grid(&state.table.load, ui);

        if let TableLoad::Loaded(grid) = &state.table.load {
            ui.add_space(12.0);
            if ui.button("Copy as HTML").clicked() {
                ui.ctx().copy_text(grid_to_html(grid));
                state.status_notice = Some(format!("Copied {} as HTML.", grid.table));
            }
        }

        ui.add_space(24.0);
        ui.separator();
        ui.heading("Reports");
        ui.label("Reporting is not available yet. Browse the tables above for raw data.");
    })
    .response
}

/// The dropdown of table names plus the load/refresh controls.
fn table_selector(state: &mut State, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Table:");
        match &state.tables.load {
            TablesLoad::Idle | TablesLoad::Loading => {
                ui.spinner();
                ui.label("Fetching table list...");
            }
            TablesLoad::Failed(error) => {
                ui.colored_label(COLOR_RED, format!("Could not list tables: {error}"));
            }
            TablesLoad::Loaded(tables) => {
                egui::ComboBox::from_id_salt("table_selector")
                    .selected_text(
                        state
                            .table_selection
                            .as_deref()
                            .unwrap_or("Select a table"),
                    )
                    .show_ui(ui, |ui| {
                        for table in tables {
                            ui.selectable_value(
                                &mut state.table_selection,
                                Some(table.clone()),
                                table,
                            );
                        }
                    });

                let can_load = state.table_selection.is_some();
                if ui
                    .add_enabled(can_load, egui::Button::new("Load"))
                    .clicked()
                {
                    if let Some(table) = state.table_selection.clone() {
                        state.table.start(&state.config, &table, ui.ctx());
                    }
                }
            }
        }
        if ui.button("\u{1F504} Refresh").clicked() {
            state.tables.start(&state.config, ui.ctx());
        }
    });
}
