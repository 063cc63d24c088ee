//! The eframe application: routing, session handling, frame loop.

use autobase_business::{
    AuthEvent, Page, PageAccess, SessionStatus, User, UserType, enforce_page_access,
    fetch_current_user, perform_logout,
};

use crate::{pages, state::State, widgets};

pub struct AutoBaseApp {
    state: State,
    /// First-frame guard: the initial navigation runs once.
    started: bool,
}

impl AutoBaseApp {
    pub fn new(state: State) -> Self {
        Self {
            state,
            started: false,
        }
    }

    /// Starts a navigation.
    ///
    /// The session is re-resolved on every navigation; the access controller
    /// decides where we actually land once the resolution arrives.
    fn navigate(state: &mut State, target: Page, egui_ctx: &egui::Context) {
        log::info!("AutoBaseApp: navigating to {target:?}");
        state.pending_page = Some(target);
        state.session = SessionStatus::Resolving;
        fetch_current_user(&state.config, state.auth_tx.clone(), egui_ctx);
    }

    fn handle_auth_events(&mut self, egui_ctx: &egui::Context) {
        while let Ok(event) = self.state.auth_rx.try_recv() {
            match event {
                AuthEvent::SessionResolved(user) => self.finish_navigation(user, egui_ctx),
                AuthEvent::LoginSucceeded {
                    username,
                    user_type,
                } => {
                    self.state.login_form.finish();
                    self.state.redirect_notice = None;
                    self.state.status_notice = Some(format!(
                        "Logged in successfully as {user_type}: {username}"
                    ));
                    // Land on the role's landing page, as the login flow
                    // always has.
                    let target = match user_type {
                        UserType::Employee => Page::EmployeeDashboard,
                        UserType::Customer | UserType::Other(_) => Page::CustomerAccount,
                    };
                    Self::navigate(&mut self.state, target, egui_ctx);
                }
                AuthEvent::LoginFailed(error) => self.state.login_form.fail(error),
                AuthEvent::LogoutSucceeded => {
                    self.state.status_notice = Some("Logged out successfully!".to_string());
                    Self::navigate(&mut self.state, Page::Home, egui_ctx);
                }
                AuthEvent::LogoutFailed(message) => {
                    self.state.status_notice = Some(message);
                    // The cookie may or may not be gone; re-resolve to find out.
                    let current = self.state.page;
                    Self::navigate(&mut self.state, current, egui_ctx);
                }
            }
        }
    }

    /// Applies a session resolution to the navigation that requested it.
    fn finish_navigation(&mut self, user: Option<User>, egui_ctx: &egui::Context) {
        self.state.session = match user {
            Some(user) => SessionStatus::SignedIn(user),
            None => SessionStatus::Anonymous,
        };

        let Some(target) = self.state.pending_page.take() else {
            return;
        };
        match enforce_page_access(self.state.session.user(), target) {
            PageAccess::Allow => {
                self.state.page = target;
                self.start_page_loaders(target, egui_ctx);
            }
            PageAccess::Redirect { target, notice } => {
                // Terminal for this page view: none of the denied page's
                // loaders run.
                self.state.redirect_notice = Some(notice);
                self.state.page = target;
            }
        }
    }

    /// Kicks off the fetches a freshly entered page needs.
    fn start_page_loaders(&mut self, page: Page, egui_ctx: &egui::Context) {
        match page {
            Page::EmployeeDashboard => self.state.tables.start(&self.state.config, egui_ctx),
            Page::CustomerAccount => self.state.customer_info.start(&self.state.config, egui_ctx),
            Page::Vehicles => self.state.vehicles.start(&self.state.config, egui_ctx),
            Page::Home | Page::Login => {}
        }
    }
}

impl eframe::App for AutoBaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            Self::navigate(&mut self.state, Page::Home, ctx);
        }

        self.handle_auth_events(ctx);
        self.state.tables.poll();
        self.state.table.poll();
        self.state.customer_info.poll();
        self.state.vehicles.poll();

        let mut action = None;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                action = widgets::navbar(&self.state, ui);
            });
        });
        match action {
            Some(widgets::NavAction::Go(page)) => Self::navigate(&mut self.state, page, ctx),
            Some(widgets::NavAction::Logout) => {
                perform_logout(&self.state.config, self.state.auth_tx.clone(), ctx);
            }
            None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.page {
                Page::Home => pages::home_page(&mut self.state, ui),
                Page::Login => pages::login_page(&mut self.state, ui),
                Page::EmployeeDashboard => pages::employee_page(&mut self.state, ui),
                Page::CustomerAccount => pages::customer_page(&mut self.state, ui),
                Page::Vehicles => pages::vehicles_page(&mut self.state, ui),
            };
        });
    }
}
