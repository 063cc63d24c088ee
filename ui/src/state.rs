//! The main application state.

use autobase_business::{
    AuthReceiver, AuthSender, BackendConfig, CustomerInfoLoader, Page, SessionStatus, TableLoader,
    TablesLoader, VehiclesLoader, create_auth_channel,
};

use crate::widgets::LoginFormState;

/// Everything the app mutates across frames.
///
/// Note: we implement Default by hand because the auth channel ends don't
/// implement it.
pub struct State {
    /// Backend location, injected once at startup.
    pub config: BackendConfig,
    /// The page currently on screen.
    pub page: Page,
    /// The session as last resolved. Re-resolved on every navigation.
    pub session: SessionStatus,
    /// Navigation target waiting for the session to resolve. Dropped when
    /// the access check redirects.
    pub pending_page: Option<Page>,
    /// The unauthorized-access notice shown on the login page.
    pub redirect_notice: Option<String>,
    /// Transient status line (logout result and the like).
    pub status_notice: Option<String>,
    /// Sender side of the auth event channel, cloned into fetch callbacks.
    pub auth_tx: AuthSender,
    /// Receiver side, drained once per frame.
    pub auth_rx: AuthReceiver,
    pub login_form: LoginFormState,
    /// The table currently picked in the dashboard selector.
    pub table_selection: Option<String>,
    pub tables: TablesLoader,
    pub table: TableLoader,
    pub customer_info: CustomerInfoLoader,
    pub vehicles: VehiclesLoader,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BackendConfig::default())
    }
}

impl State {
    pub fn new(config: BackendConfig) -> Self {
        let (auth_tx, auth_rx) = create_auth_channel();
        Self {
            config,
            page: Page::Home,
            session: SessionStatus::default(),
            pending_page: None,
            redirect_notice: None,
            status_notice: None,
            auth_tx,
            auth_rx,
            login_form: LoginFormState::default(),
            table_selection: None,
            tables: TablesLoader::default(),
            table: TableLoader::default(),
            customer_info: CustomerInfoLoader::default(),
            vehicles: VehiclesLoader::default(),
        }
    }
}
