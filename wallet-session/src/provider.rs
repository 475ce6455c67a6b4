//! Capabilities the session layer consumes from its host.
//!
//! The wallet provider, the confirmation dialog, and the full-context
//! reset are injected through these traits. The browser implementations
//! live in `wallet-web`; tests use mocks.

use crate::chain::NetworkDescriptor;

/// A provider fault, classified at the boundary adapter.
///
/// Raw numeric provider error codes (user-rejection, pending-request,
/// unknown-chain) never reach the core: the adapter maps them into these
/// variants, and anything unclassified keeps its message in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFault {
    /// The user declined the wallet prompt.
    Rejected,
    /// A prompt for this origin is already outstanding.
    Pending,
    /// The requested chain is not registered with the provider.
    UnknownChain,
    /// Any other provider-reported fault, message preserved.
    Other(String),
}

impl ProviderFault {
    /// The underlying message, for the unclassified-fault path.
    pub fn message(&self) -> String {
        match self {
            ProviderFault::Rejected => "request rejected by user".to_string(),
            ProviderFault::Pending => "request already pending".to_string(),
            ProviderFault::UnknownChain => "chain unknown to provider".to_string(),
            ProviderFault::Other(msg) => msg.clone(),
        }
    }
}

/// The injected wallet provider.
///
/// `detect` is pure and synchronous; absence of a provider is a normal
/// state, never an error. Everything else suspends on the wallet and may
/// wait indefinitely on user inaction. No timeout is imposed here; hosts
/// that want one wrap the provider (see `wallet-web`'s timed wrapper).
pub trait WalletProvider {
    /// Whether a provider object exists and identifies as the expected
    /// wallet vendor. Must never fail.
    fn detect(&self) -> bool;

    /// Request account access. Prompts the user on first call.
    fn request_accounts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, ProviderFault>>;

    /// The provider's currently active chain identifier.
    fn chain_id(&self) -> impl std::future::Future<Output = Result<String, ProviderFault>>;

    /// Ask the provider to switch its active chain.
    ///
    /// Fails with [`ProviderFault::UnknownChain`] if the chain is not
    /// registered with the provider.
    fn switch_chain(
        &self,
        chain_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ProviderFault>>;

    /// Ask the provider to register a network it does not know yet.
    fn add_chain(
        &self,
        network: &NetworkDescriptor,
    ) -> impl std::future::Future<Output = Result<(), ProviderFault>>;
}

/// Synchronous yes/no confirmation, blocking until the user answers.
/// Abstracted so tests can script the answer.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Full reset of the consuming application context.
///
/// Invoked on every chain-change notification: downstream state elsewhere
/// in the application may be chain-dependent and is not individually
/// tracked for invalidation, so the whole context is torn down. The
/// browser implementation reloads the page.
pub trait ContextReset {
    fn reset(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_message_preserved() {
        let fault = ProviderFault::Other("Internal JSON-RPC error".to_string());
        assert_eq!(fault.message(), "Internal JSON-RPC error");
    }
}
