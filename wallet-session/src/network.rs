//! Network verification and alignment.
//!
//! Verifies the provider's active chain against the target descriptor and,
//! on mismatch, walks the switch/add ladder: ask the user, ask the
//! provider to switch, and fall back to registering the network when the
//! provider does not know it. A wrong-network session stays connected;
//! only `network_verified` tracks alignment.

use std::rc::Rc;

use crate::chain::NetworkDescriptor;
use crate::error::{Result, SessionError};
use crate::hooks::SessionHooks;
use crate::provider::{ConfirmPrompt, ProviderFault, WalletProvider};
use crate::session::Session;

/// Outcome of a completed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The active chain is the target network.
    Verified,
    /// Verification did not complete in favor of the target and there is
    /// nothing further to do: a provider-driven reset superseded the
    /// check mid-flight and its result was discarded.
    Mismatched,
}

pub struct NetworkManager<P, C, H> {
    provider: Rc<P>,
    confirm: C,
    hooks: Rc<H>,
    session: Session,
    target: NetworkDescriptor,
}

impl<P, C, H> NetworkManager<P, C, H>
where
    P: WalletProvider,
    C: ConfirmPrompt,
    H: SessionHooks,
{
    pub(crate) fn new(
        provider: Rc<P>,
        confirm: C,
        hooks: Rc<H>,
        session: Session,
        target: NetworkDescriptor,
    ) -> Self {
        Self {
            provider,
            confirm,
            hooks,
            session,
            target,
        }
    }

    /// The network this manager aligns the provider to.
    pub fn target(&self) -> &NetworkDescriptor {
        &self.target
    }

    /// Check the provider's active chain against the target.
    ///
    /// On mismatch the user is asked whether to switch; declining leaves
    /// the connection valid but unverified and fails with
    /// [`SessionError::NetworkMismatch`]. Failures are forwarded to the
    /// UI hooks before being returned.
    pub async fn verify(&self) -> Result<VerifyOutcome> {
        log::info!("network: checking active chain");
        let epoch = self.session.epoch();

        let chain_id = match self.provider.chain_id().await {
            Ok(id) => id,
            Err(fault) => {
                let err = SessionError::Provider(fault.message());
                self.hooks.on_error(&err.to_string());
                return Err(err);
            }
        };

        if self.session.epoch() != epoch {
            log::warn!("network: session reset during chain query; discarding result");
            return Ok(VerifyOutcome::Mismatched);
        }

        if self.target.matches_chain(&chain_id) {
            log::info!("network: connected to {}", self.target.chain_name);
            self.session.commit_network(self.target.clone(), true);
            self.hooks.on_network_verified(&self.target);
            return Ok(VerifyOutcome::Verified);
        }

        log::warn!(
            "network: wrong chain {chain_id}, target is {}",
            self.target.chain_id
        );
        let question = format!(
            "You are not connected to {}. Would you like to switch networks?",
            self.target.chain_name
        );
        if !self.confirm.confirm(&question) {
            self.session.clear_network_verified();
            let err = SessionError::NetworkMismatch;
            self.hooks.on_network_mismatch(&err.to_string());
            return Err(err);
        }

        self.switch_network().await
    }

    /// Ask the provider to switch its active chain to the target.
    ///
    /// A provider that does not know the chain triggers exactly one
    /// [`Self::add_network`] fallback, whose result is propagated. A
    /// session reset while the provider call is suspended discards the
    /// result and reports [`VerifyOutcome::Mismatched`].
    pub async fn switch_network(&self) -> Result<VerifyOutcome> {
        log::info!("network: switching to {}", self.target.chain_name);
        let epoch = self.session.epoch();

        match self.provider.switch_chain(&self.target.chain_id).await {
            Ok(()) => {
                if self.session.epoch() != epoch {
                    log::warn!("network: session reset during switch; discarding result");
                    return Ok(VerifyOutcome::Mismatched);
                }
                self.session.commit_network(self.target.clone(), true);
                self.hooks.on_network_verified(&self.target);
                self.hooks
                    .on_success(&format!("Switched to {} successfully!", self.target.chain_name));
                Ok(VerifyOutcome::Verified)
            }
            Err(ProviderFault::UnknownChain) => {
                log::warn!("network: chain unknown to provider, registering it");
                self.add_network().await
            }
            Err(fault) => {
                self.session.clear_network_verified();
                let err = SessionError::SwitchFailed(fault.message());
                self.hooks.on_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Register the full target descriptor with the provider.
    pub async fn add_network(&self) -> Result<VerifyOutcome> {
        log::info!("network: adding {} to the wallet", self.target.chain_name);
        let epoch = self.session.epoch();

        match self.provider.add_chain(&self.target).await {
            Ok(()) => {
                if self.session.epoch() != epoch {
                    log::warn!("network: session reset during add; discarding result");
                    return Ok(VerifyOutcome::Mismatched);
                }
                self.session.commit_network(self.target.clone(), true);
                self.hooks.on_network_verified(&self.target);
                self.hooks
                    .on_success(&format!("{} added to MetaMask!", self.target.chain_name));
                Ok(VerifyOutcome::Verified)
            }
            Err(fault) => {
                let err = SessionError::AddNetworkFailed(fault.message());
                self.hooks.on_error(&err.to_string());
                Err(err)
            }
        }
    }
}
