//! Navigation model.
//!
//! A pure function of the resolved user: which auth controls are visible,
//! what the greeting says, and which role-specific links appear. The UI
//! renders this model verbatim.

use crate::access::Page;
use crate::user::{User, UserType};

/// One role-specific navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Page,
}

/// Everything the navbar needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavModel {
    pub show_login: bool,
    pub show_logout: bool,
    pub greeting: Option<String>,
    pub links: Vec<NavLink>,
}

/// Builds the navigation model for the given user.
///
/// Unrecognized roles get a greeting but no links; they must never panic.
pub fn nav_model(user: Option<&User>) -> NavModel {
    let Some(user) = user else {
        return NavModel {
            show_login: true,
            show_logout: false,
            greeting: None,
            links: Vec::new(),
        };
    };

    let links = match &user.user_type {
        UserType::Employee => vec![
            NavLink {
                label: "Dashboard",
                target: Page::EmployeeDashboard,
            },
            NavLink {
                label: "Reports",
                target: Page::EmployeeDashboard,
            },
        ],
        UserType::Customer => vec![
            NavLink {
                label: "My Account",
                target: Page::CustomerAccount,
            },
            NavLink {
                label: "Vehicles",
                target: Page::Vehicles,
            },
        ],
        UserType::Other(_) => Vec::new(),
    };

    NavModel {
        show_login: false,
        show_logout: true,
        greeting: Some(format!("{} ({})", user.username, user.user_type)),
        links,
    }
}
