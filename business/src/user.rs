//! Current-user model and session resolution.
//!
//! The identity endpoint has shipped two envelope shapes over time:
//! `{ "user": User|null }` and a bare `User` object. [`decode_current_user`]
//! accepts both and collapses anything else to anonymous. This dual-shape
//! tolerance is a compatibility contract with older backends, not an
//! accident; do not narrow it to a single shape.

use serde::{Deserialize, Deserializer, Serialize};

/// Role discriminator controlling navigation and page access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Employee,
    Customer,
    /// Any discriminator this client does not know. Unknown roles must render
    /// without links rather than fail to decode.
    #[serde(untagged)]
    Other(String),
}

impl Default for UserType {
    fn default() -> Self {
        Self::Other("unknown".to_string())
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => f.write_str("employee"),
            Self::Customer => f.write_str("customer"),
            Self::Other(role) => f.write_str(role),
        }
    }
}

/// The signed-in user, as resolved from the identity endpoint.
///
/// Immutable for the duration of a page view; re-resolved on every
/// navigation. Absent means anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Bare-envelope backends may omit the role entirely.
    #[serde(default)]
    pub user_type: UserType,
}

/// Client-visible session state for the current page view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Identity fetch is in flight.
    #[default]
    Resolving,
    /// Nobody is signed in (including every failure mode).
    Anonymous,
    SignedIn(User),
}

impl SessionStatus {
    /// The resolved user, if any. `Resolving` reads as anonymous until the
    /// fetch lands.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Resolving | Self::Anonymous => None,
        }
    }
}

/// The two known envelopes of `GET /api/auth/current_user`, plus a fallback
/// for any other valid JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrentUserEnvelope {
    /// `{ "user": { ... } }` or `{ "user": null }`. The field must be
    /// present; an explicit null is an explicit "anonymous".
    Wrapped {
        #[serde(deserialize_with = "nullable_user")]
        user: Option<User>,
    },
    /// A bare user object, identified by its `username` field.
    Bare(User),
    /// Anything else decodes as anonymous instead of failing.
    Unrecognized(serde_json::Value),
}

/// Keeps the `user` key required while still allowing `null` as its value.
fn nullable_user<'de, D>(deserializer: D) -> Result<Option<User>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<User>::deserialize(deserializer)
}

/// Normalizes an identity-endpoint body into an optional user.
///
/// Never fails: a wrapped user (or explicit null) is returned as-is, a bare
/// user object is returned directly, and every other body, malformed JSON
/// included, resolves to `None`.
pub fn decode_current_user(bytes: &[u8]) -> Option<User> {
    match serde_json::from_slice::<CurrentUserEnvelope>(bytes) {
        Ok(CurrentUserEnvelope::Wrapped { user }) => user,
        Ok(CurrentUserEnvelope::Bare(user)) => Some(user),
        Ok(CurrentUserEnvelope::Unrecognized(value)) => {
            log::info!("SessionResolver: unrecognized identity envelope: {value}");
            None
        }
        Err(err) => {
            log::error!("SessionResolver: identity body is not JSON: {err}");
            None
        }
    }
}
