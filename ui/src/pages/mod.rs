//! One module per page. Every page takes the whole mutable [`State`] and the
//! frame's `Ui`; navigation and session handling stay in the app loop.

mod customer_page;
mod employee_page;
mod home_page;
mod login_page;
mod vehicles_page;

pub use customer_page::customer_page;
pub use employee_page::employee_page;
pub use home_page::home_page;
pub use login_page::login_page;
pub use vehicles_page::vehicles_page;
