//! Login form widget.
//!
//! Collects username, password, and the role to log in as. Submission is
//! returned to the caller; the widget itself never talks to the network.

use autobase_business::{LoginInput, UserType};
use egui::{RichText, Ui};

use super::COLOR_RED;

/// Form contents plus submission status.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub input: LoginInput,
    /// Error from the last rejected attempt.
    pub error: Option<String>,
    /// True while a login request is in flight.
    pub submitting: bool,
}

impl LoginFormState {
    /// Clears the form after a successful login.
    pub fn finish(&mut self) {
        *self = Self::default();
    }

    /// Records a rejected attempt and re-enables the form.
    pub fn fail(&mut self, error: String) {
        self.error = Some(error);
        self.submitting = false;
    }
}

fn role_label(role: &Option<UserType>) -> &str {
    match role {
        Some(UserType::Employee) => "Employee",
        Some(UserType::Customer) => "Customer",
        Some(UserType::Other(_)) | None => "Select a role",
    }
}

/// Draws the form; returns the input when the user submits.
pub fn login_form(form: &mut LoginFormState, ui: &mut Ui) -> Option<LoginInput> {
    let mut submitted = false;

    if let Some(error) = &form.error {
        ui.colored_label(COLOR_RED, error);
        ui.add_space(8.0);
    }

    ui.horizontal(|ui| {
        ui.label("Username:");
        ui.text_edit_singleline(&mut form.input.username);
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Password:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut form.input.password)
                .password(true)
                .hint_text("Enter password"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Role:");
        egui::ComboBox::from_id_salt("login_role")
            .selected_text(role_label(&form.input.role))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut form.input.role, Some(UserType::Employee), "Employee");
                ui.selectable_value(&mut form.input.role, Some(UserType::Customer), "Customer");
            });
    });

    ui.add_space(16.0);

    // The only client-side gate is a chosen role and a non-blank username;
    // everything else is the backend's call.
    let can_submit =
        !form.input.username.trim().is_empty() && form.input.role.is_some() && !form.submitting;
    let button_text = if form.submitting {
        "Logging in..."
    } else {
        "Login"
    };
    if ui
        .add_enabled(can_submit, egui::Button::new(RichText::new(button_text)))
        .clicked()
    {
        submitted = true;
    }

    if submitted && can_submit {
        Some(form.input.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod login_form_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn test_login_form_fields_are_displayed() {
        let harness = Harness::new_ui_state(
            |ui, form| {
                login_form(form, ui);
            },
            LoginFormState::default(),
        );

        assert!(
            harness.query_by_label_contains("Username").is_some(),
            "Username field should be displayed"
        );
        assert!(
            harness.query_by_label_contains("Password").is_some(),
            "Password field should be displayed"
        );
        assert!(
            harness.query_by_label_contains("Role").is_some(),
            "Role selector should be displayed"
        );
        assert!(
            harness.query_by_label_contains("Login").is_some(),
            "Login button should be displayed"
        );
    }

    #[test]
    fn test_error_from_rejected_attempt_is_shown() {
        let mut form = LoginFormState::default();
        form.fail("Login failed: invalid credentials".to_string());
        assert!(!form.submitting);

        let harness = Harness::new_ui_state(
            |ui, form| {
                login_form(form, ui);
            },
            form,
        );

        assert!(
            harness
                .query_by_label_contains("invalid credentials")
                .is_some(),
            "rejection reason should be visible"
        );
    }

    #[test]
    fn test_finish_clears_the_form() {
        let mut form = LoginFormState {
            input: LoginInput {
                username: "alice".to_string(),
                password: "secret".to_string(),
                role: Some(UserType::Employee),
            },
            error: Some("stale".to_string()),
            submitting: true,
        };
        form.finish();
        assert!(form.input.username.is_empty());
        assert!(form.input.password.is_empty());
        assert!(form.input.role.is_none());
        assert!(form.error.is_none());
        assert!(!form.submitting);
    }
}
