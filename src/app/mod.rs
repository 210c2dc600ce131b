//! View controller for the resume screen.
//!
//! The controller owns the [`SessionStore`] for a mounted session and turns
//! user intents into gateway requests. Requests run on spawned tasks and
//! report back as [`SessionMessage`]s; results are only ever applied through
//! [`ViewController::handle_message`], so the store has a single writer.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::SessionMessage;
pub use types::Tab;

use tokio::sync::mpsc;

use crate::gateway::ResumeGateway;
use crate::state::{RequestToken, SessionStore};
use crate::view_state::SessionViewState;

/// Drives one resume screen session.
pub struct ViewController {
    gateway: Option<ResumeGateway>,
    store: Option<SessionStore>,
    active_tab: Tab,
    /// Shared by every session this controller mounts, so results from an
    /// earlier session can never match a slot in a later one.
    next_token: RequestToken,
    /// Spawned requests whose message has not been handled yet
    in_flight: usize,
    message_rx: mpsc::UnboundedReceiver<SessionMessage>,
    message_tx: mpsc::UnboundedSender<SessionMessage>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("mounted", &self.is_mounted())
            .field("active_tab", &self.active_tab)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl ViewController {
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            gateway: None,
            store: None,
            active_tab: Tab::default(),
            next_token: 0,
            in_flight: 0,
            message_rx,
            message_tx,
        }
    }

    /// Start a session: create a fresh store and load the resume list.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self, gateway: ResumeGateway) {
        if self.is_mounted() {
            tracing::debug!("Remounting resume session");
        }
        self.gateway = Some(gateway);
        self.store = Some(SessionStore::new());
        self.active_tab = Tab::default();
        self.refresh();
    }

    /// Tear the session down. Results still in flight are discarded on
    /// arrival.
    pub fn unmount(&mut self) {
        self.store = None;
        self.gateway = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&SessionStore> {
        self.store.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Borrowed snapshot for rendering, if mounted.
    pub fn view_state(&self) -> Option<SessionViewState<'_>> {
        self.store
            .as_ref()
            .map(|store| SessionViewState::new(store, self.active_tab))
    }

    /// Apply every message already queued. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.message_rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    /// Wait for the next request to complete.
    ///
    /// The controller holds a sender, so this only returns `None` if the
    /// channel is closed from outside.
    pub async fn next_message(&mut self) -> Option<SessionMessage> {
        self.message_rx.recv().await
    }

    /// Handle messages until no spawned request is outstanding, including
    /// requests started while handling, such as the list refresh after an
    /// upload.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.next_message().await {
                Some(msg) => self.handle_message(msg),
                None => break,
            }
        }
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        self.next_token
    }
}
