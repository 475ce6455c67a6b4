//! Session wiring: construct the connection manager and start the event
//! bridge against the injected browser provider.

use std::rc::Rc;

use futures::channel::mpsc;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use wallet_session::{ConnectionManager, NetworkDescriptor};

use crate::services::ethereum::{subscribe_provider_events, BrowserProvider};
use crate::services::prompt::{PageReload, WindowConfirm};
use crate::state::session::{SessionContext, UiHooks};

pub type AppConnection = ConnectionManager<BrowserProvider, WindowConfirm, UiHooks>;

/// Build the session stack for this page: one connection manager, one
/// event bridge draining the provider's push notifications for the
/// lifetime of the session.
///
/// Provider calls wait on the user with no deadline, matching the
/// wallet's own prompts. To bound the waits instead, wrap the provider in
/// [`crate::services::timeout::TimedProvider`] here.
pub fn start(ctx: SessionContext) -> SendWrapper<Rc<AppConnection>> {
    let connection = Rc::new(ConnectionManager::new(
        BrowserProvider::new(),
        WindowConfirm,
        UiHooks::new(ctx),
        NetworkDescriptor::sepolia(),
    ));

    let (tx, rx) = mpsc::unbounded();
    subscribe_provider_events(tx);
    let bridge = connection.event_bridge(PageReload);
    // The bridge outlives every reactive scope, so it runs on the plain
    // wasm executor rather than under a Leptos owner.
    wasm_bindgen_futures::spawn_local(bridge.run(rx));

    // Leptos 0.8 contexts and render closures require `Send + Sync`;
    // the single-threaded wasm session stack is wrapped to satisfy them.
    SendWrapper::new(connection)
}

pub fn use_connection() -> SendWrapper<Rc<AppConnection>> {
    expect_context::<SendWrapper<Rc<AppConnection>>>()
}
