//! Customer profile and vehicle loaders.
//!
//! Both endpoints are session-scoped (`/api/customer/...`); failures stay
//! inline in the owning widget and never abort unrelated page logic.

use serde::Deserialize;
use serde_json::Value;

use autobase_utils::format_label;

use crate::config::BackendConfig;
use crate::error::FetchError;
use crate::table::cell_text;

/// `GET /api/customer/info` body. The profile shape is backend-defined.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInfoResponse {
    pub customer: serde_json::Map<String, Value>,
}

/// Render state of the customer info card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerInfoLoad {
    #[default]
    Idle,
    Loading,
    /// Humanized `(label, value)` pairs in arrival order.
    Loaded(Vec<(String, String)>),
    Failed(FetchError),
}

/// Turns the raw profile mapping into display pairs.
fn info_rows(customer: &serde_json::Map<String, Value>) -> Vec<(String, String)> {
    customer
        .iter()
        .map(|(field, value)| (format_label(field), cell_text(Some(value))))
        .collect()
}

/// Fetches and holds the customer profile.
#[derive(Debug)]
pub struct CustomerInfoLoader {
    tx: flume::Sender<Result<Vec<(String, String)>, FetchError>>,
    rx: flume::Receiver<Result<Vec<(String, String)>, FetchError>>,
    pub load: CustomerInfoLoad,
}

impl Default for CustomerInfoLoader {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            load: CustomerInfoLoad::Idle,
        }
    }
}

impl CustomerInfoLoader {
    pub fn start(&mut self, config: &BackendConfig, egui_ctx: &egui::Context) {
        self.load = CustomerInfoLoad::Loading;
        let url = format!("{}/customer/info", config.api_url());
        let tx = self.tx.clone();
        let ctx = egui_ctx.clone();
        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let parsed = FetchError::check(result).and_then(|response| {
                serde_json::from_slice::<CustomerInfoResponse>(&response.bytes)
                    .map(|body| info_rows(&body.customer))
                    .map_err(FetchError::decode)
            });
            if let Err(err) = &parsed {
                log::error!("CustomerInfo: {err}");
            }
            let _ = tx.send(parsed);
            ctx.request_repaint();
        });
    }

    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            self.load = match result {
                Ok(rows) => CustomerInfoLoad::Loaded(rows),
                Err(error) => CustomerInfoLoad::Failed(error),
            };
            changed = true;
        }
        changed
    }
}

/// One vehicle on the customer's account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "VIN")]
    pub vin: String,
    #[serde(rename = "Color")]
    pub color: String,
    /// Absent when the backend has no odometer reading.
    #[serde(rename = "Mileage", default)]
    pub mileage: Option<i64>,
}

/// `GET /api/customer/vehicles` body.
#[derive(Debug, Clone, Deserialize)]
pub struct VehiclesResponse {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Render state of the vehicles page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VehiclesLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Vehicle>),
    /// The account has no vehicles. "No Vehicles Found", not an error.
    Empty,
    Failed(FetchError),
}

/// Fetches and holds the customer's vehicle list.
#[derive(Debug)]
pub struct VehiclesLoader {
    tx: flume::Sender<Result<Vec<Vehicle>, FetchError>>,
    rx: flume::Receiver<Result<Vec<Vehicle>, FetchError>>,
    pub load: VehiclesLoad,
}

impl Default for VehiclesLoader {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            load: VehiclesLoad::Idle,
        }
    }
}

impl VehiclesLoader {
    pub fn start(&mut self, config: &BackendConfig, egui_ctx: &egui::Context) {
        self.load = VehiclesLoad::Loading;
        let url = format!("{}/customer/vehicles", config.api_url());
        let tx = self.tx.clone();
        let ctx = egui_ctx.clone();
        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let parsed = FetchError::check(result).and_then(|response| {
                serde_json::from_slice::<VehiclesResponse>(&response.bytes)
                    .map(|body| body.vehicles)
                    .map_err(FetchError::decode)
            });
            if let Err(err) = &parsed {
                log::error!("Vehicles: {err}");
            }
            let _ = tx.send(parsed);
            ctx.request_repaint();
        });
    }

    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            self.load = match result {
                Ok(vehicles) if vehicles.is_empty() => VehiclesLoad::Empty,
                Ok(vehicles) => VehiclesLoad::Loaded(vehicles),
                Err(error) => VehiclesLoad::Failed(error),
            };
            changed = true;
        }
        changed
    }
}
