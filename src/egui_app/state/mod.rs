use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use chrono::NaiveDate;
use eframe::egui;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::egui_app::api::{ApiError, HttpAccountClient};
use crate::egui_app::config::Config;
use crate::egui_app::prompt::DialogPrompt;
use crate::egui_app::store::{effects, Action, AppSnapshot, Store};
use crate::shared::{RegisterRequest, SignInRequest};

/// Reasons the desktop app cannot start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] ApiError),
}

/// Central application state shared across egui views.
///
/// Views read the store snapshot and dispatch actions; effects run on the
/// tokio runtime and their follow-up actions come back through a channel
/// that `poll_effects` drains once per frame.
pub struct AppState {
    store: Store,
    runtime: Runtime,
    backend: Arc<HttpAccountClient>,
    pub prompt: DialogPrompt,
    repaint: egui::Context,
    action_tx: Sender<Action>,
    action_rx: Receiver<Action>,

    pub username_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub email_input: String,
    pub fullname_input: String,
    pub birthdate_input: String,
    pub is_register_mode: bool,
    /// Form problems caught before anything is sent
    pub form_error: Option<String>,
}

impl AppState {
    /// Build the state and check the stored session
    pub fn new(config: Config, repaint: egui::Context) -> Result<Self, StartupError> {
        let runtime = Runtime::new()?;
        let backend = Arc::new(HttpAccountClient::new(config)?);
        let (action_tx, action_rx) = channel();

        let mut state = Self {
            store: Store::new(),
            runtime,
            backend,
            prompt: DialogPrompt::new(),
            repaint,
            action_tx,
            action_rx,
            username_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            email_input: String::new(),
            fullname_input: String::new(),
            birthdate_input: String::new(),
            is_register_mode: false,
            form_error: None,
        };

        state.dispatch(Action::GetUser);
        Ok(state)
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        self.store.snapshot()
    }

    /// Apply an action and start its effects in the background
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.store.dispatch(action) {
            let backend = Arc::clone(&self.backend);
            let prompt = self.prompt.clone();
            let tx = self.action_tx.clone();
            let repaint = self.repaint.clone();

            self.runtime.spawn(async move {
                let action = effects::run(effect, backend.as_ref(), &prompt).await;
                if tx.send(action).is_err() {
                    tracing::debug!("App closed before effect finished");
                }
                repaint.request_repaint();
            });
        }
    }

    /// Feed finished effects back into the store
    pub fn poll_effects(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let signed_in_before = self.snapshot().auth_status.signed_in;
            self.dispatch(action);

            if signed_in_before != self.snapshot().auth_status.signed_in {
                self.password_input.clear();
                self.confirm_password_input.clear();
            }
        }
    }

    pub fn handle_sign_in(&mut self) {
        if self.username_input.trim().is_empty() || self.password_input.is_empty() {
            self.form_error = Some("Username and password are required".to_string());
            return;
        }
        self.form_error = None;

        self.dispatch(Action::SignIn(SignInRequest {
            username: self.username_input.trim().to_string(),
            password: self.password_input.clone(),
        }));
    }

    pub fn handle_register(&mut self) {
        match self.registration_request() {
            Ok(request) => {
                self.form_error = None;
                self.dispatch(Action::Register(request));
            }
            Err(message) => self.form_error = Some(message),
        }
    }

    fn registration_request(&self) -> Result<RegisterRequest, String> {
        if self.username_input.trim().is_empty() {
            return Err("Username is required".to_string());
        }
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            return Err("Email and password are required".to_string());
        }
        if self.password_input != self.confirm_password_input {
            return Err("Passwords do not match".to_string());
        }
        let birthdate = NaiveDate::parse_from_str(self.birthdate_input.trim(), "%Y-%m-%d")
            .map_err(|_| "Birthdate must look like 1990-05-04".to_string())?;

        Ok(RegisterRequest {
            username: self.username_input.trim().to_string(),
            password: self.password_input.clone(),
            birthdate,
            fullname: self.fullname_input.trim().to_string(),
            email: self.email_input.trim().to_string(),
        })
    }

    pub fn sign_out(&mut self) {
        self.dispatch(Action::SignOut);
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.form_error = None;
        self.password_input.clear();
        self.confirm_password_input.clear();
    }
}
