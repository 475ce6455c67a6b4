//! Session error taxonomy.
//!
//! Every failure the session layer can surface. All variants are
//! recoverable: none terminate the session or the page, and the user may
//! retry the failed operation at will. The `Display` strings are the
//! user-facing messages forwarded to the UI hooks, so they are written for
//! people, not logs.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures of the connect handshake and network negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No injected provider object, or it does not identify as MetaMask.
    #[error("MetaMask not detected. Please install MetaMask extension.")]
    ProviderNotFound,

    /// The user declined the connection prompt in the wallet.
    #[error("Connection rejected. Please approve the connection in MetaMask.")]
    UserRejected,

    /// The wallet already has an outstanding prompt for this origin.
    #[error("Connection request pending. Please check MetaMask.")]
    RequestPending,

    /// The provider granted access but returned no accounts.
    #[error("No accounts found. Please check MetaMask.")]
    EmptyAccountSet,

    /// The active chain differs from the target and the user declined to
    /// switch. Non-fatal: the connection itself remains valid.
    #[error("Please switch to Sepolia testnet to use this app.")]
    NetworkMismatch,

    /// The provider failed to switch chains for a reason other than not
    /// knowing the chain.
    #[error("Failed to switch network. Please switch manually in MetaMask.")]
    SwitchFailed(String),

    /// The provider refused to register the target network.
    #[error("Failed to add Sepolia network. Please add it manually in MetaMask.")]
    AddNetworkFailed(String),

    /// A provider-driven reset (disconnect or chain change) superseded an
    /// in-flight operation; its result was discarded, nothing was applied.
    ///
    /// The one failure not forwarded to the UI hooks: the superseding
    /// event already drove the UI (disconnect message or full reset), so
    /// surfacing this too would report the same change twice. Callers see
    /// it in the returned `Result` and may still show the message.
    #[error("Wallet state changed while the request was in flight. Please retry.")]
    Superseded,

    /// Catch-all for provider faults not otherwise classified. Preserves
    /// the underlying provider message for diagnostics.
    #[error("{0}")]
    Provider(String),
}
