//! Client Store
//!
//! Client-side authentication state, modelled as a pure reducer over an
//! immutable snapshot plus a queue of effects.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs          - Store
//! ├── actions.rs      - Action enum
//! ├── state.rs        - Snapshot types
//! ├── reducer.rs      - reduce(snapshot, action) -> (snapshot, effects)
//! ├── effects.rs      - Effect enum and the effect runner
//! └── errors.rs       - Sign-in error kinds shown to the user
//! ```
//!
//! # Flow
//!
//! 1. A view dispatches an `Action`
//! 2. `reduce` returns the next snapshot and the effects to run
//! 3. Each effect runs (network call or confirmation) and yields one `Action`
//! 4. That action is dispatched in turn

use std::collections::VecDeque;

pub mod actions;
pub mod effects;
pub mod errors;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use effects::Effect;
pub use errors::SignInError;
pub use reducer::reduce;
pub use state::{AppSnapshot, AuthStatusState, SignInPageState, SignOutState};

use crate::egui_app::api::AccountBackend;
use crate::egui_app::prompt::ConfirmationPrompt;

/// Holder of the current snapshot
///
/// Each dispatch replaces the snapshot as a whole, so no reader ever sees a
/// half-applied action.
#[derive(Debug, Clone, Default)]
pub struct Store {
    snapshot: AppSnapshot,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    /// Apply one action and return the effects it requested
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let name = action.name();
        let (next, effects) = reduce(&self.snapshot, action);
        if next != self.snapshot {
            tracing::debug!("{} changed state: {:?}", name, next);
        } else {
            tracing::debug!("{} left state unchanged", name);
        }
        self.snapshot = next;
        effects
    }

    /// Dispatch an action and keep running effects, in order, until none are
    /// left
    pub async fn dispatch_and_settle<B, P>(&mut self, action: Action, backend: &B, prompt: &P)
    where
        B: AccountBackend,
        P: ConfirmationPrompt,
    {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in self.dispatch(action) {
                queue.push_back(effects::run(effect, backend, prompt).await);
            }
        }
    }
}
