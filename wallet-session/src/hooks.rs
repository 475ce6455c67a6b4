//! UI hook surface invoked by the session layer.
//!
//! The core never touches the DOM; it reports through these hooks and the
//! frontend decides how to render. Messages are already user-facing (see
//! [`crate::error::SessionError`]), so hook implementations can display
//! them verbatim.

use crate::chain::NetworkDescriptor;

/// Callbacks the session layer invokes as the session evolves.
pub trait SessionHooks {
    /// A connection committed, or the provider switched to another
    /// account. Consumers refresh the wallet display and re-check
    /// voting eligibility for the new account.
    fn on_connected(&self, address: &str);

    /// The session was torn down; `message` tells the user reconnection
    /// is required.
    fn on_disconnected(&self, message: &str);

    /// The active chain was verified against the target network.
    fn on_network_verified(&self, network: &NetworkDescriptor);

    /// Connected to the wrong network and the user declined to switch.
    fn on_network_mismatch(&self, message: &str);

    fn on_error(&self, message: &str);

    fn on_success(&self, message: &str);
}
