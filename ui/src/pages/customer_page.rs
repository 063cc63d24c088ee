//! The customer account page.

use egui::{Response, Ui};

use crate::state::State;
use crate::widgets;

pub fn customer_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("My Account");
            if ui.button("\u{1F504} Refresh").clicked() {
                state.customer_info.start(&state.config, ui.ctx());
            }
        });
        ui.add_space(12.0);
        widgets::customer_info_card(&state.customer_info.load, ui);
    })
    .response
}

#[cfg(test)]
mod customer_page_tests {
    use autobase_business::CustomerInfoLoad;
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;

    #[test]
    fn test_account_page_renders_info_rows() {
        let mut state = State::default();
        state.customer_info.load = CustomerInfoLoad::Loaded(vec![(
            "Phone Number".to_string(),
            "555-0100".to_string(),
        )]);
        let harness = Harness::new_ui_state(
            |ui, state| {
                super::customer_page(state, ui);
            },
            state,
        );

        assert!(harness.query_by_label_contains("My Account").is_some());
        assert!(harness.query_by_label_contains("Phone Number").is_some());
        assert!(harness.query_by_label_contains("555-0100").is_some());
    }
}
