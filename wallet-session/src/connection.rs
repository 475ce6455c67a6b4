//! The connect handshake.
//!
//! [`ConnectionManager`] orchestrates detection, the account request, the
//! single state commit, and the follow-up network verification. It owns
//! the [`Session`] and the [`NetworkManager`]; the [`EventBridge`] is
//! derived from it so all three share the same session instance.
//!
//! Failure discipline: zero state commits on any path before the account
//! commit, exactly one commit on success, and a network-verification
//! failure after the commit never rolls the connection back.

use std::rc::Rc;

use crate::chain::NetworkDescriptor;
use crate::error::{Result, SessionError};
use crate::events::EventBridge;
use crate::hooks::SessionHooks;
use crate::network::NetworkManager;
use crate::provider::{ConfirmPrompt, ContextReset, ProviderFault, WalletProvider};
use crate::session::Session;

pub struct ConnectionManager<P, C, H> {
    provider: Rc<P>,
    hooks: Rc<H>,
    session: Session,
    network: NetworkManager<P, C, H>,
}

impl<P, C, H> ConnectionManager<P, C, H>
where
    P: WalletProvider,
    C: ConfirmPrompt,
    H: SessionHooks,
{
    pub fn new(provider: P, confirm: C, hooks: H, target: NetworkDescriptor) -> Self {
        let provider = Rc::new(provider);
        let hooks = Rc::new(hooks);
        let session = Session::new();
        let network = NetworkManager::new(
            provider.clone(),
            confirm,
            hooks.clone(),
            session.clone(),
            target,
        );
        Self {
            provider,
            hooks,
            session,
            network,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn network(&self) -> &NetworkManager<P, C, H> {
        &self.network
    }

    /// Build the event bridge that folds provider notifications into this
    /// manager's session.
    pub fn event_bridge<R: ContextReset>(&self, reset: R) -> EventBridge<H, R> {
        EventBridge::new(self.session.clone(), self.hooks.clone(), reset)
    }

    /// Run the connect handshake and return the connected address.
    ///
    /// Suspends while the wallet prompts the user; by default there is no
    /// timeout and the call waits on user inaction indefinitely. Failures
    /// are forwarded to the UI hooks before being returned, and a result
    /// that resolves after a provider-driven reset is discarded with
    /// [`SessionError::Superseded`] instead of being applied.
    pub async fn connect(&self) -> Result<String> {
        log::info!("wallet: attempting to connect");

        if !self.provider.detect() {
            let err = SessionError::ProviderNotFound;
            self.hooks.on_error(&err.to_string());
            return Err(err);
        }

        let epoch = self.session.epoch();
        let accounts = match self.provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(fault) => {
                let err = classify_account_fault(fault);
                log::error!("wallet: connection failed: {err}");
                self.hooks.on_error(&err.to_string());
                return Err(err);
            }
        };

        let Some(account) = accounts.first().cloned() else {
            let err = SessionError::EmptyAccountSet;
            self.hooks.on_error(&err.to_string());
            return Err(err);
        };

        if self.session.epoch() != epoch {
            log::warn!("wallet: connect superseded by a provider event; discarding result");
            return Err(SessionError::Superseded);
        }

        self.session.commit_account(account.clone());
        self.hooks.on_connected(&account);
        self.hooks.on_success("Wallet connected successfully!");

        // Verification outcome does not roll the connection back; a
        // connected-but-wrong-network session is valid. The network
        // manager has already reported any failure through the hooks.
        if let Err(err) = self.network.verify().await {
            log::warn!("wallet: connected but network not verified: {err}");
        }

        Ok(account)
    }
}

fn classify_account_fault(fault: ProviderFault) -> SessionError {
    match fault {
        ProviderFault::Rejected => SessionError::UserRejected,
        ProviderFault::Pending => SessionError::RequestPending,
        fault => SessionError::Provider(fault.message()),
    }
}
