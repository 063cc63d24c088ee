//! The login page: redirect notice plus the login form.

use autobase_business::perform_login;
use egui::{Response, Ui};

use crate::state::State;
use crate::widgets::{self, COLOR_RED};

pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.heading("Login");

        // Why the user landed here, if they didn't come willingly.
        if let Some(notice) = &state.redirect_notice {
            ui.add_space(8.0);
            ui.colored_label(COLOR_RED, notice);
        }
        ui.add_space(16.0);

        ui.scope(|ui| {
            ui.set_max_width(360.0);
            if let Some(input) = widgets::login_form(&mut state.login_form, ui) {
                state.login_form.submitting = true;
                state.login_form.error = None;
                perform_login(&state.config, &input, state.auth_tx.clone(), ui.ctx());
            }
        });
    })
    .response
}
