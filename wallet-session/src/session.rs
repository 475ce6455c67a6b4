//! Shared session state.
//!
//! [`Session`] is the single source of truth for the wallet session. It is
//! created once at startup, owned by the connection manager, and cloned
//! into the network manager and the event bridge; it is never reachable
//! through a global. All mutation happens inside event-loop turns, so a
//! plain `Rc<RefCell<_>>` gives one writer at a time without locks.
//!
//! The "connected iff an account is set" invariant is structural:
//! connectedness is derived from the account field, so no code path can
//! make the two disagree.

use std::cell::RefCell;
use std::rc::Rc;

use crate::chain::NetworkDescriptor;

/// Snapshot of the wallet session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    account: Option<String>,
    network: Option<NetworkDescriptor>,
    network_verified: bool,
    epoch: u64,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The currently observed network. May be absent while connected:
    /// verification can fail without invalidating the connection.
    pub fn network(&self) -> Option<&NetworkDescriptor> {
        self.network.as_ref()
    }

    pub fn network_verified(&self) -> bool {
        self.network_verified
    }

    /// Reset generation. Bumped on every full reset; in-flight operations
    /// capture it before suspending and discard their result if it moved.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Shared handle to the one [`SessionState`] of the process.
#[derive(Clone, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current state, for display or assertions.
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.borrow().is_connected()
    }

    pub fn account(&self) -> Option<String> {
        self.inner.borrow().account.clone()
    }

    pub fn network(&self) -> Option<NetworkDescriptor> {
        self.inner.borrow().network.clone()
    }

    pub fn network_verified(&self) -> bool {
        self.inner.borrow().network_verified
    }

    pub fn epoch(&self) -> u64 {
        self.inner.borrow().epoch
    }

    /// Commit a fresh connection. The only place a new account enters the
    /// session during a handshake.
    pub fn commit_account(&self, account: String) {
        log::info!("session: connected as {account}");
        self.inner.borrow_mut().account = Some(account);
    }

    /// Replace the account after a provider-side account switch. The
    /// connection stays up; network state is untouched because the chain
    /// did not change.
    pub fn switch_account(&self, account: String) {
        log::info!("session: switched account to {account}");
        self.inner.borrow_mut().account = Some(account);
    }

    /// Record the observed network and whether it is the verified target.
    pub fn commit_network(&self, network: NetworkDescriptor, verified: bool) {
        let mut state = self.inner.borrow_mut();
        state.network = Some(network);
        state.network_verified = verified;
    }

    /// Mark the network unverified without forgetting what is observed.
    pub fn clear_network_verified(&self) {
        self.inner.borrow_mut().network_verified = false;
    }

    /// Full disconnect: clear everything and bump the epoch so any
    /// operation suspended across this reset discards its result.
    pub fn reset(&self) {
        log::warn!("session: reset to disconnected");
        let mut state = self.inner.borrow_mut();
        state.account = None;
        state.network = None;
        state.network_verified = false;
        state.epoch += 1;
    }
}
