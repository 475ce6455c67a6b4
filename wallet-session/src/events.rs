//! Bridge from provider-pushed notifications to session state.
//!
//! The provider pushes `accountsChanged` and `chainChanged` for the
//! lifetime of the session; nothing is polled. The boundary adapter feeds
//! those callbacks into one ordered channel and [`EventBridge::run`]
//! drains it, so there is a single choke point where unsolicited events
//! meet the session. Each handler runs to completion before the next
//! queued event is processed.

use std::rc::Rc;

use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use crate::hooks::SessionHooks;
use crate::provider::ContextReset;
use crate::session::Session;

/// A notification pushed by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The current account collection. Empty means the user disconnected
    /// the site in the wallet.
    AccountsChanged(Vec<String>),
    /// The provider's active chain changed.
    ChainChanged(String),
}

pub struct EventBridge<H, R> {
    session: Session,
    hooks: Rc<H>,
    reset: R,
}

impl<H, R> EventBridge<H, R>
where
    H: SessionHooks,
    R: ContextReset,
{
    pub(crate) fn new(session: Session, hooks: Rc<H>, reset: R) -> Self {
        Self {
            session,
            hooks,
            reset,
        }
    }

    /// Fold one provider event into the session.
    pub fn apply(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.first() {
                None => {
                    log::warn!("wallet: disconnected by provider");
                    self.session.reset();
                    self.hooks.on_disconnected(
                        "Wallet disconnected. Please reconnect to continue voting.",
                    );
                }
                Some(account) => {
                    if self.session.account().as_deref() == Some(account.as_str()) {
                        return;
                    }
                    // Account switch, no new permission grant: lighter
                    // path than a full connect, same post-connection
                    // side effects.
                    self.session.switch_account(account.clone());
                    self.hooks.on_connected(account);
                }
            },
            ProviderEvent::ChainChanged(chain_id) => {
                // Downstream state may be chain-dependent and is not
                // individually tracked for invalidation, so the whole
                // application context is torn down. Correctness over
                // continuity.
                log::warn!("wallet: chain changed to {chain_id}, resetting application context");
                self.session.reset();
                self.reset.reset();
            }
        }
    }

    /// Drain the provider event queue until the sender side closes.
    pub async fn run(self, mut events: UnboundedReceiver<ProviderEvent>) {
        while let Some(event) = events.next().await {
            self.apply(event);
        }
        log::info!("wallet: provider event stream closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::NetworkDescriptor;
    use crate::mock::{CountingReset, HookEvent, RecordingHooks};
    use futures::channel::mpsc;

    fn bridge(
        session: Session,
        hooks: RecordingHooks,
        reset: CountingReset,
    ) -> EventBridge<RecordingHooks, CountingReset> {
        EventBridge::new(session, Rc::new(hooks), reset)
    }

    fn connected_session() -> Session {
        let session = Session::new();
        session.commit_account("0xabc".to_string());
        session.commit_network(NetworkDescriptor::sepolia(), true);
        session
    }

    #[test]
    fn test_empty_accounts_is_full_disconnect() {
        let session = connected_session();
        let hooks = RecordingHooks::new();
        let bridge = bridge(session.clone(), hooks.clone(), CountingReset::new());

        bridge.apply(ProviderEvent::AccountsChanged(vec![]));

        assert!(!session.is_connected());
        assert_eq!(session.account(), None);
        assert_eq!(session.network(), None);
        assert!(!session.network_verified());
        assert!(hooks.contains(&HookEvent::Disconnected(
            "Wallet disconnected. Please reconnect to continue voting.".to_string()
        )));
    }

    #[test]
    fn test_empty_accounts_disconnects_from_any_prior_state() {
        // Even a session that never connected ends fully cleared.
        let session = Session::new();
        let hooks = RecordingHooks::new();
        let bridge = bridge(session.clone(), hooks.clone(), CountingReset::new());

        bridge.apply(ProviderEvent::AccountsChanged(vec![]));
        assert!(!session.is_connected());
        assert_eq!(session.network(), None);
    }

    #[test]
    fn test_account_switch_keeps_connection() {
        let session = connected_session();
        let hooks = RecordingHooks::new();
        let bridge = bridge(session.clone(), hooks.clone(), CountingReset::new());

        bridge.apply(ProviderEvent::AccountsChanged(vec![
            "0xdef".to_string(),
            "0xabc".to_string(),
        ]));

        assert!(session.is_connected());
        assert_eq!(session.account().as_deref(), Some("0xdef"));
        assert!(hooks.contains(&HookEvent::Connected("0xdef".to_string())));
    }

    #[test]
    fn test_same_account_notification_is_a_no_op() {
        let session = connected_session();
        let hooks = RecordingHooks::new();
        let bridge = bridge(session.clone(), hooks.clone(), CountingReset::new());

        bridge.apply(ProviderEvent::AccountsChanged(vec!["0xabc".to_string()]));
        assert!(hooks.events().is_empty());
    }

    #[test]
    fn test_chain_change_resets_context_exactly_once() {
        let session = connected_session();
        let reset = CountingReset::new();
        let bridge = bridge(session.clone(), RecordingHooks::new(), reset.clone());

        bridge.apply(ProviderEvent::ChainChanged("0x1".to_string()));
        assert_eq!(reset.count(), 1);
        assert!(!session.is_connected());

        // One reset per event, independent of the chain delta. Even a
        // "change" to the target chain tears the context down.
        bridge.apply(ProviderEvent::ChainChanged("0xaa36a7".to_string()));
        assert_eq!(reset.count(), 2);
    }

    #[test]
    fn test_chain_change_bumps_epoch_to_supersede_inflight_work() {
        let session = connected_session();
        let before = session.epoch();
        let bridge = bridge(session.clone(), RecordingHooks::new(), CountingReset::new());

        bridge.apply(ProviderEvent::ChainChanged("0x1".to_string()));
        assert_eq!(session.epoch(), before + 1);
    }

    #[tokio::test]
    async fn test_run_processes_queued_events_in_order() {
        let session = Session::new();
        let hooks = RecordingHooks::new();
        let reset = CountingReset::new();
        let bridge = bridge(session.clone(), hooks.clone(), reset.clone());

        let (tx, rx) = mpsc::unbounded();
        tx.unbounded_send(ProviderEvent::AccountsChanged(vec!["0xabc".to_string()]))
            .unwrap();
        tx.unbounded_send(ProviderEvent::ChainChanged("0x1".to_string()))
            .unwrap();
        tx.unbounded_send(ProviderEvent::AccountsChanged(vec![])).unwrap();
        drop(tx);

        bridge.run(rx).await;

        assert_eq!(
            hooks.events(),
            vec![
                HookEvent::Connected("0xabc".to_string()),
                HookEvent::Disconnected(
                    "Wallet disconnected. Please reconnect to continue voting.".to_string()
                ),
            ]
        );
        assert_eq!(reset.count(), 1);
        assert!(!session.is_connected());
    }
}
