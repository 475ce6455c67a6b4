//! # Wallet Session Library
//!
//! Connection and network negotiation state machine for the BlockVote
//! frontend. Manages the session with a browser-injected wallet provider:
//! detection, the connect handshake, network verification/switch/add, and
//! the event bridge that folds provider-pushed notifications (account
//! switch, network switch, disconnect) into the session state.
//!
//! ## Structure
//!
//! - **[`chain`]**: network descriptors and the Sepolia target
//! - **[`error`]**: the [`SessionError`] taxonomy
//! - **[`session`]**: the shared [`Session`] state handle
//! - **[`provider`]**: capability traits consumed from the host
//! - **[`hooks`]**: the UI hook surface invoked by the core
//! - **[`connection`]**: the connect handshake orchestrator
//! - **[`network`]**: chain verification, switching, registration
//! - **[`events`]**: the provider event bridge
//!
//! The crate has no platform dependency: the provider, the confirmation
//! dialog, and the context reset are injected through traits, so the whole
//! state machine runs under `cargo test` with mocks. The browser adapters
//! live in the `wallet-web` crate.
//!
//! ## Concurrency model
//!
//! Single logical actor, cooperative scheduling. Provider calls are
//! suspension points during which the event loop may deliver an
//! unsolicited notification; every mutation after a suspension point
//! re-checks the session epoch and discards its result if a reset took
//! precedence. See [`session::Session::epoch`].

pub mod chain;
pub mod connection;
pub mod error;
pub mod events;
pub mod hooks;
pub mod network;
pub mod provider;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use chain::{NativeCurrency, NetworkDescriptor};
pub use connection::ConnectionManager;
pub use error::{Result, SessionError};
pub use events::{EventBridge, ProviderEvent};
pub use hooks::SessionHooks;
pub use network::{NetworkManager, VerifyOutcome};
pub use provider::{ConfirmPrompt, ContextReset, ProviderFault, WalletProvider};
pub use session::{Session, SessionState};
