//! Session view state for rendering.
//!
//! The `wallet-session` core reports through its UI hooks; this module
//! mirrors those reports into Leptos signals so components can react
//! without touching the core directly.

use leptos::prelude::*;

use wallet_session::{NetworkDescriptor, SessionHooks};

use crate::utils::format::truncate_address;

/// What the UI knows about the wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletView {
    #[default]
    Disconnected,
    Connected {
        address: String,
        network: Option<String>,
        verified: bool,
    },
}

impl WalletView {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletView::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletView::Connected { address, .. } => Some(address),
            WalletView::Disconnected => None,
        }
    }

    /// Short label for the navbar, e.g. `0xAbc0...0001`.
    pub fn display_name(&self) -> String {
        match self {
            WalletView::Connected { address, .. } => truncate_address(address),
            WalletView::Disconnected => "Not connected".to_string(),
        }
    }

    /// Whether the session is on the verified target network.
    pub fn network_verified(&self) -> bool {
        matches!(
            self,
            WalletView::Connected { verified: true, .. }
        )
    }

    pub fn network_label(&self) -> String {
        match self {
            WalletView::Connected {
                network: Some(name),
                verified: true,
                ..
            } => name.clone(),
            WalletView::Connected { .. } => "Unknown network".to_string(),
            WalletView::Disconnected => String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient status banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// Global session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub wallet: RwSignal<WalletView>,
    pub toast: RwSignal<Option<Toast>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletView::Disconnected),
            toast: RwSignal::new(None),
        }
    }

    pub fn show_success(&self, text: &str) {
        self.toast.set(Some(Toast {
            kind: ToastKind::Success,
            text: text.to_string(),
        }));
    }

    pub fn show_error(&self, text: &str) {
        self.toast.set(Some(Toast {
            kind: ToastKind::Error,
            text: text.to_string(),
        }));
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// [`SessionHooks`] implementation that folds core reports into the
/// Leptos signals.
pub struct UiHooks {
    ctx: SessionContext,
}

impl UiHooks {
    pub fn new(ctx: SessionContext) -> Self {
        Self { ctx }
    }
}

impl SessionHooks for UiHooks {
    fn on_connected(&self, address: &str) {
        let address = address.to_string();
        self.ctx.wallet.update(|view| {
            // An account switch keeps whatever network state was known.
            let (network, verified) = match view {
                WalletView::Connected {
                    network, verified, ..
                } => (network.take(), *verified),
                WalletView::Disconnected => (None, false),
            };
            *view = WalletView::Connected {
                address,
                network,
                verified,
            };
        });
    }

    fn on_disconnected(&self, message: &str) {
        self.ctx.wallet.set(WalletView::Disconnected);
        self.ctx.show_error(message);
    }

    fn on_network_verified(&self, network: &NetworkDescriptor) {
        let name = network.chain_name.clone();
        self.ctx.wallet.update(|view| {
            if let WalletView::Connected {
                network, verified, ..
            } = view
            {
                *network = Some(name);
                *verified = true;
            }
        });
    }

    fn on_network_mismatch(&self, message: &str) {
        self.ctx.wallet.update(|view| {
            if let WalletView::Connected { verified, .. } = view {
                *verified = false;
            }
        });
        self.ctx.show_error(message);
    }

    fn on_error(&self, message: &str) {
        self.ctx.show_error(message);
    }

    fn on_success(&self, message: &str) {
        self.ctx.show_success(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_view() {
        let view = WalletView::default();
        assert!(!view.is_connected());
        assert_eq!(view.address(), None);
        assert_eq!(view.display_name(), "Not connected");
        assert_eq!(view.network_label(), "");
    }

    #[test]
    fn test_connected_view_display() {
        let view = WalletView::Connected {
            address: "0xAbc0000000000000000000000000000000000001".to_string(),
            network: Some("Sepolia Testnet".to_string()),
            verified: true,
        };
        assert!(view.is_connected());
        assert_eq!(view.display_name(), "0xAbc0...0001");
        assert_eq!(view.network_label(), "Sepolia Testnet");
    }

    #[test]
    fn test_unverified_network_label() {
        let view = WalletView::Connected {
            address: "0xAbc0000000000000000000000000000000000001".to_string(),
            network: Some("Sepolia Testnet".to_string()),
            verified: false,
        };
        assert_eq!(view.network_label(), "Unknown network");
    }
}
