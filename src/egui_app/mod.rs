//! egui Desktop App
//!
//! Native client for the walletbox server.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Desktop binary
//! ├── config.rs       - Server URL configuration
//! ├── api.rs          - AccountBackend trait and reqwest client
//! ├── prompt.rs       - Confirmation prompt used by sign out
//! ├── store/          - Actions, snapshots, reducer, effects
//! ├── state/          - Desktop AppState (store + runtime + form inputs)
//! ├── views/          - Sign-in page, landing page, top bar, dialog
//! └── theme/          - Colours and global style
//! ```

pub mod api;
pub mod config;
pub mod prompt;
pub mod state;
pub mod store;
pub mod theme;
pub mod views;

pub use api::{AccountBackend, ApiError, HttpAccountClient};
pub use config::Config;
pub use prompt::{ConfirmationPrompt, DialogPrompt};
pub use state::{AppState, StartupError};
pub use store::{Action, AppSnapshot, Store};
