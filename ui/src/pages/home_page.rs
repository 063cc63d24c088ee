//! The landing page.

use egui::{Response, RichText, Ui};

use crate::state::State;
use crate::widgets::COLOR_GREEN;

pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(RichText::new("Welcome to AutoBase").size(32.0));
        ui.add_space(8.0);
        ui.label("Your dealership, one place.");

        if let Some(notice) = &state.status_notice {
            ui.add_space(24.0);
            ui.colored_label(COLOR_GREEN, notice);
        }
    })
    .response
}
