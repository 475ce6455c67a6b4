//! Scripted capability implementations for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::chain::NetworkDescriptor;
use crate::hooks::SessionHooks;
use crate::provider::{ConfirmPrompt, ContextReset, ProviderFault, WalletProvider};
use crate::session::Session;

#[derive(Clone)]
pub(crate) struct MockProvider {
    inner: Rc<RefCell<MockInner>>,
}

struct MockInner {
    present: bool,
    accounts: Result<Vec<String>, ProviderFault>,
    chain: Result<String, ProviderFault>,
    switch_result: Result<(), ProviderFault>,
    add_result: Result<(), ProviderFault>,
    accounts_calls: u32,
    chain_calls: u32,
    switch_calls: u32,
    add_calls: u32,
    // When set, the session is reset while the named call is suspended,
    // simulating an unsolicited event racing the handshake.
    reset_during_accounts: Option<Session>,
    reset_during_chain: Option<Session>,
    reset_during_switch: Option<Session>,
}

impl MockProvider {
    /// Provider present on Sepolia with one account; every call succeeds.
    pub fn happy() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MockInner {
                present: true,
                accounts: Ok(vec!["0xAbc0000000000000000000000000000000000001".to_string()]),
                chain: Ok("0xaa36a7".to_string()),
                switch_result: Ok(()),
                add_result: Ok(()),
                accounts_calls: 0,
                chain_calls: 0,
                switch_calls: 0,
                add_calls: 0,
                reset_during_accounts: None,
                reset_during_chain: None,
                reset_during_switch: None,
            })),
        }
    }

    pub fn absent() -> Self {
        let mock = Self::happy();
        mock.inner.borrow_mut().present = false;
        mock
    }

    pub fn set_accounts(&self, accounts: Result<Vec<String>, ProviderFault>) {
        self.inner.borrow_mut().accounts = accounts;
    }

    pub fn set_chain(&self, chain: Result<String, ProviderFault>) {
        self.inner.borrow_mut().chain = chain;
    }

    pub fn set_switch_result(&self, result: Result<(), ProviderFault>) {
        self.inner.borrow_mut().switch_result = result;
    }

    pub fn set_add_result(&self, result: Result<(), ProviderFault>) {
        self.inner.borrow_mut().add_result = result;
    }

    pub fn reset_session_during_accounts(&self, session: Session) {
        self.inner.borrow_mut().reset_during_accounts = Some(session);
    }

    pub fn reset_session_during_chain(&self, session: Session) {
        self.inner.borrow_mut().reset_during_chain = Some(session);
    }

    pub fn reset_session_during_switch(&self, session: Session) {
        self.inner.borrow_mut().reset_during_switch = Some(session);
    }

    pub fn accounts_calls(&self) -> u32 {
        self.inner.borrow().accounts_calls
    }

    pub fn switch_calls(&self) -> u32 {
        self.inner.borrow().switch_calls
    }

    pub fn add_calls(&self) -> u32 {
        self.inner.borrow().add_calls
    }
}

impl WalletProvider for MockProvider {
    fn detect(&self) -> bool {
        self.inner.borrow().present
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFault> {
        let mut inner = self.inner.borrow_mut();
        inner.accounts_calls += 1;
        if let Some(session) = inner.reset_during_accounts.take() {
            session.reset();
        }
        inner.accounts.clone()
    }

    async fn chain_id(&self) -> Result<String, ProviderFault> {
        let mut inner = self.inner.borrow_mut();
        inner.chain_calls += 1;
        if let Some(session) = inner.reset_during_chain.take() {
            session.reset();
        }
        inner.chain.clone()
    }

    async fn switch_chain(&self, _chain_id: &str) -> Result<(), ProviderFault> {
        let mut inner = self.inner.borrow_mut();
        inner.switch_calls += 1;
        if let Some(session) = inner.reset_during_switch.take() {
            session.reset();
        }
        inner.switch_result.clone()
    }

    async fn add_chain(&self, _network: &NetworkDescriptor) -> Result<(), ProviderFault> {
        let mut inner = self.inner.borrow_mut();
        inner.add_calls += 1;
        inner.add_result.clone()
    }
}

/// Confirmation prompt with a canned answer.
#[derive(Clone)]
pub(crate) struct ScriptedConfirm {
    answer: bool,
    asked: Rc<Cell<u32>>,
}

impl ScriptedConfirm {
    pub fn always(answer: bool) -> Self {
        Self {
            answer,
            asked: Rc::new(Cell::new(0)),
        }
    }

    pub fn asked(&self) -> u32 {
        self.asked.get()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HookEvent {
    Connected(String),
    Disconnected(String),
    NetworkVerified(String),
    NetworkMismatch(String),
    Error(String),
    Success(String),
}

/// Hook implementation that records every invocation in order.
#[derive(Clone, Default)]
pub(crate) struct RecordingHooks {
    events: Rc<RefCell<Vec<HookEvent>>>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HookEvent> {
        self.events.borrow().clone()
    }

    pub fn contains(&self, event: &HookEvent) -> bool {
        self.events.borrow().contains(event)
    }
}

impl SessionHooks for RecordingHooks {
    fn on_connected(&self, address: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::Connected(address.to_string()));
    }

    fn on_disconnected(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::Disconnected(message.to_string()));
    }

    fn on_network_verified(&self, network: &NetworkDescriptor) {
        self.events
            .borrow_mut()
            .push(HookEvent::NetworkVerified(network.chain_id.clone()));
    }

    fn on_network_mismatch(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::NetworkMismatch(message.to_string()));
    }

    fn on_error(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::Error(message.to_string()));
    }

    fn on_success(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::Success(message.to_string()));
    }
}

/// Context reset that only counts invocations.
#[derive(Clone, Default)]
pub(crate) struct CountingReset {
    count: Rc<Cell<u32>>,
}

impl CountingReset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }
}

impl ContextReset for CountingReset {
    fn reset(&self) {
        self.count.set(self.count.get() + 1);
    }
}
