//! Grid rendering for a loaded table.
//!
//! Draws whatever state the table loader is in: a hint while idle, a spinner
//! while loading, a single placeholder row for an empty table, a single error
//! row naming the table on failure, and the grid itself once loaded.

use autobase_business::{TableGrid, TableLoad};
use egui::Ui;
use egui_extras::{Column, TableBuilder};

use super::COLOR_RED;

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 22.0;

pub fn table_grid(load: &TableLoad, ui: &mut Ui) {
    match load {
        TableLoad::Idle => {
            ui.label("Select a table and load it to browse its rows.");
        }
        TableLoad::Loading { table } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {table}..."));
            });
        }
        TableLoad::Empty { table } => {
            ui.label(format!("No data found for {table}"));
        }
        TableLoad::Failed { table, error } => {
            ui.colored_label(COLOR_RED, format!("Error loading data for {table}: {error}"));
        }
        TableLoad::Loaded(grid) => render_grid(grid, ui),
    }
}

fn render_grid(grid: &TableGrid, ui: &mut Ui) {
    // Scope the widget id to the table so column widths reset between tables
    // with different shapes.
    ui.push_id(&grid.table, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(80.0).resizable(true), grid.columns.len())
            .header(HEADER_HEIGHT, |mut header| {
                for column in &grid.columns {
                    header.col(|ui| {
                        ui.strong(column);
                    });
                }
            })
            .body(|mut body| {
                for cells in &grid.rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

#[cfg(test)]
mod table_grid_tests {
    use autobase_business::{FetchError, TableGrid, TableLoad};
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn harness_for(load: TableLoad) -> Harness<'static, TableLoad> {
        Harness::new_ui_state(
            |ui, load| {
                super::table_grid(load, ui);
            },
            load,
        )
    }

    #[test]
    fn test_loaded_grid_shows_headers_and_cells() {
        let harness = harness_for(TableLoad::Loaded(TableGrid {
            table: "Orders".to_string(),
            columns: vec!["OrderID".to_string(), "Status".to_string()],
            rows: vec![vec!["7".to_string(), "open".to_string()]],
        }));

        assert!(harness.query_by_label_contains("OrderID").is_some());
        assert!(harness.query_by_label_contains("Status").is_some());
        assert!(harness.query_by_label_contains("open").is_some());
    }

    #[test]
    fn test_empty_table_renders_placeholder_row() {
        let harness = harness_for(TableLoad::Empty {
            table: "Orders".to_string(),
        });
        assert!(
            harness
                .query_by_label_contains("No data found for Orders")
                .is_some(),
            "empty table should say so, without headers"
        );
    }

    #[test]
    fn test_failed_table_names_the_table() {
        let harness = harness_for(TableLoad::Failed {
            table: "Orders".to_string(),
            error: FetchError::Status(500),
        });
        assert!(
            harness
                .query_by_label_contains("Error loading data for Orders")
                .is_some()
        );
    }
}
