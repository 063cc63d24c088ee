//! Schema-driven table loading.
//!
//! Tables are browsed by name; their shape is unknown until the first row
//! arrives. Loading a table issues two concurrent fetches (primary-key
//! metadata and the row collection), joins them, and derives the display
//! column order from the first row with the primary key moved to the front.
//!
//! ## Races
//!
//! Selecting a new table does not cancel an outstanding load. Each call to
//! [`TableLoader::start`] bumps a generation counter and every completion
//! carries the generation it belongs to; stale completions are discarded on
//! [`TableLoader::poll`]. The grid is cleared when a load *starts*, so a slow
//! superseded fetch can never resurrect old rows.

use serde::Deserialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::FetchError;

/// One record: column name to scalar value, in arrival order.
pub type TableRow = serde_json::Map<String, Value>;

/// `GET /primary_key/{table}` body.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryKeyResponse {
    #[serde(rename = "COLUMN_NAME", default)]
    pub column_name: Option<String>,
}

/// A fully materialized grid, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub table: String,
    pub columns: Vec<String>,
    /// One entry per record, one cell per column, already stringified.
    pub rows: Vec<Vec<String>>,
}

/// Derives the display column order from the first record.
///
/// Columns keep their arrival order, except the primary key (when present
/// among them) moves to index 0. This is a stable partition: the key sorts
/// before everything and everything else stays equal to each other.
pub fn order_columns(first_row: &TableRow, primary_key: Option<&str>) -> Vec<String> {
    let mut columns: Vec<String> = first_row.keys().cloned().collect();
    if let Some(pk) = primary_key {
        if columns.iter().any(|c| c == pk) {
            columns.sort_by_key(|c| c != pk);
        }
    }
    columns
}

/// Default text form of a cell value: absent and null render empty, strings
/// render verbatim, everything else renders as its JSON text.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Materializes rows into a grid. Empty input yields no columns at all; the
/// caller renders a placeholder instead.
pub fn build_grid(table: &str, primary_key: Option<&str>, rows: &[TableRow]) -> TableGrid {
    let Some(first_row) = rows.first() else {
        return TableGrid {
            table: table.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        };
    };

    let columns = order_columns(first_row, primary_key);
    let cells = rows
        .iter()
        .map(|row| columns.iter().map(|col| cell_text(row.get(col))).collect())
        .collect();

    TableGrid {
        table: table.to_string(),
        columns,
        rows: cells,
    }
}

/// Render state of the table widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableLoad {
    /// No table selected yet.
    #[default]
    Idle,
    /// Both fetches in flight; the previous grid is already gone.
    Loading { table: String },
    Loaded(TableGrid),
    /// The backend has the table but no rows. One placeholder row, not an
    /// error.
    Empty { table: String },
    /// Either fetch failed; a single error row names the table.
    Failed { table: String, error: FetchError },
}

/// One half of a joined load.
#[derive(Debug)]
enum TablePart {
    PrimaryKey(u64, Result<Option<String>, FetchError>),
    Rows(u64, Result<Vec<TableRow>, FetchError>),
}

/// The halves received so far for the current generation.
#[derive(Debug, Default)]
struct PendingLoad {
    table: String,
    primary_key: Option<Result<Option<String>, FetchError>>,
    rows: Option<Result<Vec<TableRow>, FetchError>>,
}

/// Drives the two-fetch load of one table and owns its render state.
///
/// `start` from a UI event, `poll` every frame, draw from `load`.
#[derive(Debug)]
pub struct TableLoader {
    generation: u64,
    pending: Option<PendingLoad>,
    tx: flume::Sender<TablePart>,
    rx: flume::Receiver<TablePart>,
    pub load: TableLoad,
}

impl Default for TableLoader {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            generation: 0,
            pending: None,
            tx,
            rx,
            load: TableLoad::Idle,
        }
    }
}

impl TableLoader {
    /// Starts loading `table`, superseding any outstanding load.
    ///
    /// The grid is cleared here, on start, to bound the staleness window; a
    /// superseded completion is discarded by generation on `poll`.
    pub fn start(&mut self, config: &BackendConfig, table: &str, egui_ctx: &egui::Context) {
        let generation = self.begin(table);
        log::info!("TableLoader: loading '{table}' (generation {generation})");

        let pk_url = format!("{}/primary_key/{table}", config.table_url());
        let tx = self.tx.clone();
        let ctx = egui_ctx.clone();
        ehttp::fetch(ehttp::Request::get(&pk_url), move |result| {
            let parsed = FetchError::check(result).and_then(|response| {
                serde_json::from_slice::<PrimaryKeyResponse>(&response.bytes)
                    .map(|body| body.column_name)
                    .map_err(FetchError::decode)
            });
            let _ = tx.send(TablePart::PrimaryKey(generation, parsed));
            ctx.request_repaint();
        });

        // The row endpoint is the lowercased table name, per the backend
        // contract.
        let rows_url = format!("{}/{}", config.table_url(), table.to_lowercase());
        let tx = self.tx.clone();
        let ctx = egui_ctx.clone();
        ehttp::fetch(ehttp::Request::get(&rows_url), move |result| {
            let parsed = FetchError::check(result).and_then(|response| {
                // An absent collection arrives as `null`; treat it like empty.
                serde_json::from_slice::<Option<Vec<TableRow>>>(&response.bytes)
                    .map(Option::unwrap_or_default)
                    .map_err(FetchError::decode)
            });
            let _ = tx.send(TablePart::Rows(generation, parsed));
            ctx.request_repaint();
        });
    }

    /// Drains completions and finalizes the load once both halves of the
    /// current generation have arrived. Returns true if `load` changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(part) = self.rx.try_recv() {
            changed |= self.apply(part);
        }
        changed
    }

    /// Bumps the generation and resets render state for a fresh load.
    fn begin(&mut self, table: &str) -> u64 {
        self.generation += 1;
        self.pending = Some(PendingLoad {
            table: table.to_string(),
            ..PendingLoad::default()
        });
        self.load = TableLoad::Loading {
            table: table.to_string(),
        };
        self.generation
    }

    fn apply(&mut self, part: TablePart) -> bool {
        let generation = match &part {
            TablePart::PrimaryKey(generation, _) | TablePart::Rows(generation, _) => *generation,
        };
        if generation != self.generation {
            log::info!("TableLoader: dropping completion of superseded load");
            return false;
        }
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match part {
            TablePart::PrimaryKey(_, result) => pending.primary_key = Some(result),
            TablePart::Rows(_, result) => pending.rows = Some(result),
        }
        if pending.primary_key.is_none() || pending.rows.is_none() {
            // All-of join: wait for the other half.
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.load = finalize(pending);
        log::info!("TableLoader: generation {generation} finished");
        true
    }
}

/// Combines the two halves into the final render state.
fn finalize(pending: PendingLoad) -> TableLoad {
    let table = pending.table;
    let (primary_key, rows) = match (pending.primary_key, pending.rows) {
        (Some(Ok(primary_key)), Some(Ok(rows))) => (primary_key, rows),
        (Some(Err(error)), _) | (_, Some(Err(error))) => {
            log::error!("TableLoader: load of '{table}' failed: {error}");
            return TableLoad::Failed { table, error };
        }
        // apply() only finalizes once both halves are present.
        _ => {
            return TableLoad::Failed {
                table,
                error: FetchError::Transport("load finalized early".to_string()),
            };
        }
    };

    if rows.is_empty() {
        TableLoad::Empty { table }
    } else {
        TableLoad::Loaded(build_grid(&table, primary_key.as_deref(), &rows))
    }
}

/// Load state of the table-name selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TablesLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<String>),
    Failed(FetchError),
}

/// Fetches `GET /tables` for the selector dropdown.
#[derive(Debug)]
pub struct TablesLoader {
    tx: flume::Sender<Result<Vec<String>, FetchError>>,
    rx: flume::Receiver<Result<Vec<String>, FetchError>>,
    pub load: TablesLoad,
}

impl Default for TablesLoader {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            load: TablesLoad::Idle,
        }
    }
}

impl TablesLoader {
    pub fn start(&mut self, config: &BackendConfig, egui_ctx: &egui::Context) {
        self.load = TablesLoad::Loading;
        let url = format!("{}/tables", config.table_url());
        let tx = self.tx.clone();
        let ctx = egui_ctx.clone();
        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let parsed = FetchError::check(result).and_then(|response| {
                serde_json::from_slice::<Vec<String>>(&response.bytes).map_err(FetchError::decode)
            });
            if let Err(err) = &parsed {
                log::error!("TablesLoader: {err}");
            }
            let _ = tx.send(parsed);
            ctx.request_repaint();
        });
    }

    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            self.load = match result {
                Ok(tables) => TablesLoad::Loaded(tables),
                Err(error) => TablesLoad::Failed(error),
            };
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> TableRow {
        match value {
            Value::Object(map) => map,
            other => panic!("test row must be an object, got {other}"),
        }
    }

    #[test]
    fn test_order_columns_moves_primary_key_first() {
        // The Orders scenario: first row {Status, OrderID, Total}, pk OrderID.
        let first = row(json!({"Status": "open", "OrderID": 7, "Total": 9.5}));
        assert_eq!(
            order_columns(&first, Some("OrderID")),
            ["OrderID", "Status", "Total"]
        );
    }

    #[test]
    fn test_order_columns_preserves_relative_order() {
        let first = row(json!({"c": 1, "a": 2, "b": 3, "id": 4, "z": 5}));
        assert_eq!(order_columns(&first, Some("id")), ["id", "c", "a", "b", "z"]);
    }

    #[test]
    fn test_order_columns_without_primary_key() {
        let first = row(json!({"b": 1, "a": 2}));
        assert_eq!(order_columns(&first, None), ["b", "a"]);
        // A key the row does not have changes nothing.
        assert_eq!(order_columns(&first, Some("missing")), ["b", "a"]);
    }

    #[test]
    fn test_cell_text_defaults() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(Some(&json!("plain"))), "plain");
        assert_eq!(cell_text(Some(&json!(9.5))), "9.5");
        assert_eq!(cell_text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_build_grid_orders_and_stringifies() {
        let rows = vec![
            row(json!({"Status": "open", "OrderID": 7, "Total": 9.5})),
            row(json!({"Status": "shipped", "OrderID": 8})),
        ];
        let grid = build_grid("Orders", Some("OrderID"), &rows);
        assert_eq!(grid.columns, ["OrderID", "Status", "Total"]);
        assert_eq!(grid.rows[0], ["7", "open", "9.5"]);
        // A field absent from a later record renders empty.
        assert_eq!(grid.rows[1], ["8", "shipped", ""]);
    }

    #[test]
    fn test_build_grid_empty_rowset_has_no_columns() {
        let grid = build_grid("Orders", Some("OrderID"), &[]);
        assert!(grid.columns.is_empty());
        assert!(grid.rows.is_empty());
    }

    fn loaded_rows() -> Vec<TableRow> {
        vec![row(json!({"Status": "open", "OrderID": 7}))]
    }

    #[test]
    fn test_loader_joins_both_halves() {
        let mut loader = TableLoader::default();
        let generation = loader.begin("Orders");
        assert!(matches!(loader.load, TableLoad::Loading { .. }));

        loader
            .tx
            .send(TablePart::Rows(generation, Ok(loaded_rows())))
            .expect("send rows");
        assert!(!loader.poll(), "must wait for the primary-key half");
        assert!(matches!(loader.load, TableLoad::Loading { .. }));

        loader
            .tx
            .send(TablePart::PrimaryKey(generation, Ok(Some("OrderID".to_string()))))
            .expect("send primary key");
        assert!(loader.poll());
        match &loader.load {
            TableLoad::Loaded(grid) => {
                assert_eq!(grid.table, "Orders");
                assert_eq!(grid.columns, ["OrderID", "Status"]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_empty_rowset_is_not_an_error() {
        let mut loader = TableLoader::default();
        let generation = loader.begin("Orders");
        loader
            .tx
            .send(TablePart::PrimaryKey(generation, Ok(Some("OrderID".to_string()))))
            .expect("send primary key");
        loader
            .tx
            .send(TablePart::Rows(generation, Ok(Vec::new())))
            .expect("send rows");
        assert!(loader.poll());
        assert_eq!(
            loader.load,
            TableLoad::Empty {
                table: "Orders".to_string()
            }
        );
    }

    #[test]
    fn test_loader_either_failure_fails_the_load() {
        let mut loader = TableLoader::default();
        let generation = loader.begin("Orders");
        loader
            .tx
            .send(TablePart::PrimaryKey(
                generation,
                Err(FetchError::Status(500)),
            ))
            .expect("send primary key");
        loader
            .tx
            .send(TablePart::Rows(generation, Ok(loaded_rows())))
            .expect("send rows");
        assert!(loader.poll());
        match &loader.load {
            TableLoad::Failed { table, error } => {
                assert_eq!(table, "Orders");
                assert_eq!(*error, FetchError::Status(500));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_discards_superseded_generation() {
        let mut loader = TableLoader::default();
        let stale = loader.begin("Orders");
        // User picks another table while the first load is in flight.
        let current = loader.begin("Customers");
        assert_eq!(
            loader.load,
            TableLoad::Loading {
                table: "Customers".to_string()
            }
        );

        // Both halves of the stale load land; they must change nothing.
        loader
            .tx
            .send(TablePart::PrimaryKey(stale, Ok(Some("OrderID".to_string()))))
            .expect("send primary key");
        loader
            .tx
            .send(TablePart::Rows(stale, Ok(loaded_rows())))
            .expect("send rows");
        assert!(!loader.poll());
        assert!(matches!(loader.load, TableLoad::Loading { .. }));

        // The current load still completes normally afterwards.
        loader
            .tx
            .send(TablePart::PrimaryKey(current, Ok(None)))
            .expect("send primary key");
        loader
            .tx
            .send(TablePart::Rows(
                current,
                Ok(vec![row(json!({"Name": "Ada"}))]),
            ))
            .expect("send rows");
        assert!(loader.poll());
        match &loader.load {
            TableLoad::Loaded(grid) => assert_eq!(grid.table, "Customers"),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }
}
