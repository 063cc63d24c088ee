//! Reusable widgets: navbar, login form, the table grid, and the record
//! cards.

mod customer_info;
mod login_form;
mod navbar;
mod table_grid;
mod vehicle_card;

pub use customer_info::customer_info_card;
pub use login_form::{LoginFormState, login_form};
pub use navbar::{NavAction, navbar};
pub use table_grid::table_grid;
pub use vehicle_card::vehicle_card;

use egui::Color32;

/// Red color for error status
pub(crate) const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
/// Green color for success status
pub(crate) const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
