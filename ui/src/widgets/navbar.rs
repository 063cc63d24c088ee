//! Top navigation bar.
//!
//! Renders the [`NavModel`] for the resolved user verbatim: a Home link is
//! always present, role-specific links and the greeting come from the model,
//! and exactly one of the login/logout controls is visible.

use autobase_business::{Page, SessionStatus, nav_model};
use egui::{Align, Layout, RichText, Ui};

use crate::state::State;

/// What the user asked the navbar to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(Page),
    Logout,
}

pub fn navbar(state: &State, ui: &mut Ui) -> Option<NavAction> {
    let mut action = None;
    let model = nav_model(state.session.user());

    ui.label(RichText::new("AutoBase").strong().size(18.0));
    ui.separator();

    if ui
        .selectable_label(state.page == Page::Home, "Home")
        .clicked()
    {
        action = Some(NavAction::Go(Page::Home));
    }
    for link in &model.links {
        if ui
            .selectable_label(state.page == link.target, link.label)
            .clicked()
        {
            action = Some(NavAction::Go(link.target));
        }
    }

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if model.show_login && ui.button("Login").clicked() {
            action = Some(NavAction::Go(Page::Login));
        }
        if model.show_logout && ui.button("Logout").clicked() {
            action = Some(NavAction::Logout);
        }
        if let Some(greeting) = &model.greeting {
            ui.label(format!("\u{1F44B} {greeting}"));
        }
        if matches!(state.session, SessionStatus::Resolving) {
            ui.spinner();
        }
    });

    action
}
