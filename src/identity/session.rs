use std::sync::Arc;

use tokio::sync::watch;

use crate::error::StoreError;
use crate::identity::Identity;

/// Holds the current identity of one client and notifies subscribers when it changes.
///
/// Clones share the same cell. A new session starts signed out.
#[derive(Debug, Clone)]
pub struct Session {
    state: Arc<watch::Sender<Option<Identity>>>,
}

impl Session {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state: Arc::new(state) }
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    /// The signed-in identity, or [`StoreError::AuthenticationRequired`].
    pub fn require_user(&self) -> Result<Identity, StoreError> {
        self.current_user().ok_or(StoreError::AuthenticationRequired)
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Receiver that observes every later sign-in and sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.state.subscribe()
    }

    pub(crate) fn set(&self, identity: Option<Identity>) {
        self.state.send_replace(identity);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
