//! MetaMask integration via wasm-bindgen.
//!
//! JavaScript interop for the injected `window.ethereum` provider:
//! detection, the JSON-RPC `request` bridge, and the push-event
//! subscriptions. This is the only place raw provider error codes exist;
//! they are classified into [`ProviderFault`] before anything else sees
//! them.

use futures::channel::mpsc::UnboundedSender;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use wallet_session::{NetworkDescriptor, ProviderEvent, ProviderFault, WalletProvider};

#[wasm_bindgen(inline_js = "
export function detectMetaMask() {
    return typeof window.ethereum !== 'undefined' && window.ethereum.isMetaMask === true;
}

export async function ethereumRequest(payload) {
    if (typeof window.ethereum === 'undefined') {
        throw { code: 0, message: 'No Ethereum provider injected' };
    }
    return await window.ethereum.request(payload);
}

export function onEthereumEvent(event, callback) {
    if (typeof window.ethereum !== 'undefined' && typeof window.ethereum.on === 'function') {
        window.ethereum.on(event, callback);
    }
}
")]
extern "C" {
    /// Whether an injected provider exists and identifies as MetaMask.
    fn detectMetaMask() -> bool;

    /// Forward a `{ method, params }` payload to `ethereum.request`.
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(payload: &JsValue) -> Result<JsValue, JsValue>;

    /// Register a listener on a provider push channel.
    fn onEthereumEvent(event: &str, callback: &js_sys::Function);
}

// Provider error codes per EIP-1193 / MetaMask.
const CODE_USER_REJECTED: i64 = 4001;
const CODE_REQUEST_PENDING: i64 = -32002;
const CODE_UNKNOWN_CHAIN: i64 = 4902;

#[derive(Serialize)]
struct RequestPayload<'a, T: Serialize> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParam<'a> {
    chain_id: &'a str,
}

/// The injected browser wallet as a [`WalletProvider`].
#[derive(Clone, Copy, Default)]
pub struct BrowserProvider;

impl BrowserProvider {
    pub fn new() -> Self {
        Self
    }

    async fn request<T: Serialize>(
        &self,
        method: &str,
        params: Option<T>,
    ) -> Result<JsValue, ProviderFault> {
        let payload = serde_wasm_bindgen::to_value(&RequestPayload { method, params })
            .map_err(|e| ProviderFault::Other(format!("failed to encode request: {e}")))?;
        ethereumRequest(&payload).await.map_err(classify_fault)
    }
}

impl WalletProvider for BrowserProvider {
    fn detect(&self) -> bool {
        detectMetaMask()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFault> {
        let value = self.request::<()>("eth_requestAccounts", None).await?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ProviderFault::Other(format!("unexpected accounts response: {e}")))
    }

    async fn chain_id(&self) -> Result<String, ProviderFault> {
        let value = self.request::<()>("eth_chainId", None).await?;
        value
            .as_string()
            .ok_or_else(|| ProviderFault::Other("chain id is not a string".to_string()))
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderFault> {
        self.request("wallet_switchEthereumChain", Some([SwitchChainParam { chain_id }]))
            .await?;
        Ok(())
    }

    async fn add_chain(&self, network: &NetworkDescriptor) -> Result<(), ProviderFault> {
        self.request("wallet_addEthereumChain", Some([network])).await?;
        Ok(())
    }
}

/// Map a provider exception into the fault taxonomy.
///
/// MetaMask throws objects shaped `{ code, message }`; anything without a
/// recognized code keeps its message for diagnostics.
fn classify_fault(err: JsValue) -> ProviderFault {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{err:?}"));

    match code {
        Some(CODE_USER_REJECTED) => ProviderFault::Rejected,
        Some(CODE_REQUEST_PENDING) => ProviderFault::Pending,
        Some(CODE_UNKNOWN_CHAIN) => ProviderFault::UnknownChain,
        _ => ProviderFault::Other(message),
    }
}

/// Subscribe to the provider's push channels, forwarding each
/// notification into the event bridge queue.
///
/// The closures are leaked on purpose: the subscriptions live for the
/// whole page session.
pub fn subscribe_provider_events(tx: UnboundedSender<ProviderEvent>) {
    let accounts_tx = tx.clone();
    let on_accounts = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        let accounts: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap_or_default();
        log::info!("provider event: accountsChanged ({} accounts)", accounts.len());
        let _ = accounts_tx.unbounded_send(ProviderEvent::AccountsChanged(accounts));
    });
    onEthereumEvent("accountsChanged", on_accounts.as_ref().unchecked_ref());
    on_accounts.forget();

    let on_chain = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        let chain_id = value.as_string().unwrap_or_default();
        log::info!("provider event: chainChanged ({chain_id})");
        let _ = tx.unbounded_send(ProviderEvent::ChainChanged(chain_id));
    });
    onEthereumEvent("chainChanged", on_chain.as_ref().unchecked_ref());
    on_chain.forget();
}
