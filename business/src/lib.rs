//! Business logic for the AutoBase client.
//!
//! Everything that decides something lives here, independent of widgets:
//! session resolution, page access control, the navigation model, the
//! schema-driven table loader, and the customer/vehicle loaders. The `ui`
//! crate renders these states and forwards user intent back in.

pub mod access;
pub mod auth;
pub mod config;
pub mod customer;
pub mod error;
pub mod html;
pub mod nav;
pub mod table;
pub mod user;

pub use access::{Page, PageAccess, enforce_page_access, required_role};
pub use auth::{
    AuthEvent, AuthReceiver, AuthSender, LoginInput, create_auth_channel, fetch_current_user,
    perform_login, perform_logout,
};
pub use config::BackendConfig;
pub use customer::{
    CustomerInfoLoad, CustomerInfoLoader, Vehicle, VehiclesLoad, VehiclesLoader,
};
pub use error::FetchError;
pub use html::grid_to_html;
pub use nav::{NavLink, NavModel, nav_model};
pub use table::{
    TableGrid, TableLoad, TableLoader, TableRow, TablesLoad, TablesLoader, build_grid, cell_text,
    order_columns,
};
pub use user::{SessionStatus, User, UserType, decode_current_user};
