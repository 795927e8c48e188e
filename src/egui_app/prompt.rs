/**
 * Confirmation Prompt
 *
 * The sign-out flow suspends on a `ConfirmationPrompt` until the user
 * answers. `DialogPrompt` is the egui implementation: `confirm` parks a
 * oneshot sender, the dialog view shows the question and `respond` completes
 * the waiting future.
 */

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

/// Asks the user a yes/no question
pub trait ConfirmationPrompt: Send + Sync {
    /// Resolves to `true` if the user confirmed
    fn confirm(&self, message: &str) -> impl Future<Output = bool> + Send;
}

#[derive(Default)]
struct OpenQuestion {
    message: Option<String>,
    responder: Option<oneshot::Sender<bool>>,
}

/// Prompt answered from the UI thread
#[derive(Clone, Default)]
pub struct DialogPrompt {
    open: Arc<Mutex<OpenQuestion>>,
}

impl DialogPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, OpenQuestion> {
        self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Question waiting for an answer, if any
    pub fn pending_message(&self) -> Option<String> {
        self.lock().message.clone()
    }

    /// Answer the open question. Does nothing when none is open.
    pub fn respond(&self, confirmed: bool) {
        let responder = {
            let mut open = self.lock();
            open.message = None;
            open.responder.take()
        };

        if let Some(responder) = responder {
            // The waiting side may have been dropped with its task
            let _ = responder.send(confirmed);
        }
    }
}

impl ConfirmationPrompt for DialogPrompt {
    async fn confirm(&self, message: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        {
            let mut open = self.lock();
            open.message = Some(message.to_string());
            // Replacing an older question drops its sender, which declines it
            open.responder = Some(tx);
        }

        rx.await.unwrap_or(false)
    }
}
