//! Session resolution and login/logout commands.
//!
//! All three calls run through `ehttp` and report back over a flume channel
//! the UI drains once per frame. Session resolution never surfaces an error:
//! the client prefers degrading to "logged out" over crashing, so transport
//! and decode failures are logged and collapsed to anonymous.

use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::FetchError;
use crate::user::{User, UserType, decode_current_user};

/// Completions of the auth-related calls, delivered to the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The identity endpoint answered (or failed, which reads as anonymous).
    SessionResolved(Option<User>),
    LoginSucceeded { username: String, user_type: UserType },
    LoginFailed(String),
    LogoutSucceeded,
    LogoutFailed(String),
}

pub type AuthSender = flume::Sender<AuthEvent>;
pub type AuthReceiver = flume::Receiver<AuthEvent>;

/// Creates the channel that carries [`AuthEvent`]s back to the UI loop.
pub fn create_auth_channel() -> (AuthSender, AuthReceiver) {
    flume::unbounded()
}

/// Login form contents as submitted.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    /// Role picked in the selector; submission is rejected client-side while
    /// this is unset.
    pub role: Option<UserType>,
}

/// `POST /api/auth/login` payload.
#[derive(Debug, Clone, Serialize)]
struct LoginRequest {
    username: String,
    password: String,
    user_type: UserType,
}

/// Optional failure body of the login endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
struct LoginErrorBody {
    error: Option<String>,
}

/// Resolves the current user via `GET /api/auth/current_user`.
///
/// Never raises to its caller: every failure mode is logged and delivered as
/// `SessionResolved(None)`.
pub fn fetch_current_user(config: &BackendConfig, tx: AuthSender, egui_ctx: &egui::Context) {
    let url = format!("{}/auth/current_user", config.api_url());
    let ctx = egui_ctx.clone();
    ehttp::fetch(ehttp::Request::get(&url), move |result| {
        let user = match FetchError::check(result) {
            Ok(response) => decode_current_user(&response.bytes),
            Err(err) => {
                log::error!("SessionResolver: {err}");
                None
            }
        };
        let _ = tx.send(AuthEvent::SessionResolved(user));
        ctx.request_repaint();
    });
}

/// Submits the login form via `POST /api/auth/login`.
///
/// Username and password are trimmed; no further client-side validation.
/// The success body is ignored beyond its status; a failure body may carry
/// `{ "error": ... }`, which becomes the failure message.
pub fn perform_login(
    config: &BackendConfig,
    input: &LoginInput,
    tx: AuthSender,
    egui_ctx: &egui::Context,
) {
    let Some(role) = input.role.clone() else {
        let _ = tx.send(AuthEvent::LoginFailed(
            "Please select a role before logging in.".to_string(),
        ));
        return;
    };

    let username = input.username.trim().to_string();
    let payload = LoginRequest {
        username: username.clone(),
        password: input.password.trim().to_string(),
        user_type: role.clone(),
    };
    let body = match serde_json::to_vec(&payload) {
        Ok(body) => body,
        Err(err) => {
            log::error!("Login: failed to serialize request: {err}");
            let _ = tx.send(AuthEvent::LoginFailed(format!("Internal error: {err}")));
            return;
        }
    };

    log::info!("Login: submitting credentials for '{username}' as {role}");

    let url = format!("{}/auth/login", config.api_url());
    let mut request = ehttp::Request::post(&url, body);
    request.headers.insert("Content-Type", "application/json");

    let ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        let event = match result {
            Ok(response) if response.ok => AuthEvent::LoginSucceeded {
                username: username.clone(),
                user_type: role.clone(),
            },
            Ok(response) => {
                let reason = serde_json::from_slice::<LoginErrorBody>(&response.bytes)
                    .unwrap_or_default()
                    .error
                    .unwrap_or_else(|| format!("HTTP {}", response.status));
                log::info!("Login: rejected: {reason}");
                AuthEvent::LoginFailed(format!("Login failed: {reason}"))
            }
            Err(err) => {
                log::error!("Login: request failed: {err}");
                AuthEvent::LoginFailed(
                    "Login failed. Please check your credentials or try again later.".to_string(),
                )
            }
        };
        let _ = tx.send(event);
        ctx.request_repaint();
    });
}

/// Ends the server-side session via `POST /api/auth/logout`. Status only.
pub fn perform_logout(config: &BackendConfig, tx: AuthSender, egui_ctx: &egui::Context) {
    let url = format!("{}/auth/logout", config.api_url());
    let request = ehttp::Request::post(&url, Vec::new());

    let ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        let event = match FetchError::check(result) {
            Ok(_) => {
                log::info!("Logout: session ended");
                AuthEvent::LogoutSucceeded
            }
            Err(err) => {
                log::error!("Logout: {err}");
                AuthEvent::LogoutFailed(
                    "An issue occurred while logging out. You may need to clear your cookies manually."
                        .to_string(),
                )
            }
        };
        let _ = tx.send(event);
        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_without_role_is_rejected_before_any_request() {
        let (tx, rx) = create_auth_channel();
        let input = LoginInput {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: None,
        };
        perform_login(&BackendConfig::new("http://127.0.0.1:1"), &input, tx, &egui::Context::default());

        let event = rx.try_recv().expect("rejection is synchronous");
        assert_eq!(
            event,
            AuthEvent::LoginFailed("Please select a role before logging in.".to_string())
        );
    }

    #[test]
    fn test_login_request_wire_shape() {
        let payload = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
            user_type: UserType::Employee,
        };
        let json = serde_json::to_string(&payload).expect("serializes");
        assert_eq!(
            json,
            r#"{"username":"alice","password":"secret","user_type":"employee"}"#
        );
    }

    #[test]
    fn test_login_error_body_is_optional() {
        let body: LoginErrorBody = serde_json::from_slice(b"{}").expect("deserializes");
        assert!(body.error.is_none());
        let body: LoginErrorBody =
            serde_json::from_slice(br#"{"error": "bad password"}"#).expect("deserializes");
        assert_eq!(body.error.as_deref(), Some("bad password"));
    }
}
