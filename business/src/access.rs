//! Role-based page access control.
//!
//! Pages are an explicit enum resolved once at route entry; access is a
//! single Allow/Redirect decision per navigation, not a long-lived state
//! machine.

use crate::user::{User, UserType};

/// Every page the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    /// Employee-only dashboard with the table browser and reports.
    EmployeeDashboard,
    /// Customer account details.
    CustomerAccount,
    /// The customer's vehicle list.
    Vehicles,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::EmployeeDashboard => "Dashboard",
            Self::CustomerAccount => "My Account",
            Self::Vehicles => "Vehicles",
        }
    }
}

/// The role a page demands, if any.
pub fn required_role(page: Page) -> Option<UserType> {
    match page {
        Page::EmployeeDashboard => Some(UserType::Employee),
        Page::CustomerAccount | Page::Vehicles => Some(UserType::Customer),
        Page::Home | Page::Login => None,
    }
}

/// Outcome of the access check for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAccess {
    Allow,
    /// Terminal for the current page view: show `notice`, land on `target`,
    /// and run none of the page's loaders.
    Redirect { target: Page, notice: String },
}

/// Decides whether `user` may see `page`.
///
/// Unprotected pages always allow, whoever asks. Protected pages redirect to
/// the login page unless the resolved user carries exactly the required role.
pub fn enforce_page_access(user: Option<&User>, page: Page) -> PageAccess {
    let Some(required) = required_role(page) else {
        return PageAccess::Allow;
    };

    match user {
        Some(user) if user.user_type == required => PageAccess::Allow,
        _ => {
            log::info!(
                "AccessController: {} access denied for {:?}",
                page.title(),
                user.map(|u| u.username.as_str()).unwrap_or("anonymous"),
            );
            PageAccess::Redirect {
                target: Page::Login,
                notice: format!("Unauthorized access. {} accounts only.", role_name(&required)),
            }
        }
    }
}

fn role_name(role: &UserType) -> String {
    let name = role.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
