//! Optional timeout wrapper around a wallet provider.
//!
//! Provider calls normally wait on the user indefinitely (a wallet prompt
//! has no deadline). Hosts that want bounded waits can wrap the provider
//! in [`TimedProvider`]; an expired call surfaces as an ordinary provider
//! fault and the session stays retryable.

use std::future::Future;

use futures::{pin_mut, select, FutureExt};
use gloo_timers::future::TimeoutFuture;

use wallet_session::{NetworkDescriptor, ProviderFault, WalletProvider};

pub struct TimedProvider<P> {
    inner: P,
    timeout_ms: u32,
}

impl<P> TimedProvider<P> {
    pub fn new(inner: P, timeout_ms: u32) -> Self {
        Self { inner, timeout_ms }
    }
}

async fn timed<T>(
    call: impl Future<Output = Result<T, ProviderFault>>,
    timeout_ms: u32,
) -> Result<T, ProviderFault> {
    let call = call.fuse();
    let deadline = TimeoutFuture::new(timeout_ms).fuse();
    pin_mut!(call, deadline);
    select! {
        result = call => result,
        _ = deadline => Err(ProviderFault::Other(format!(
            "Wallet request timed out after {timeout_ms}ms"
        ))),
    }
}

impl<P: WalletProvider> WalletProvider for TimedProvider<P> {
    fn detect(&self) -> bool {
        self.inner.detect()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFault> {
        timed(self.inner.request_accounts(), self.timeout_ms).await
    }

    async fn chain_id(&self) -> Result<String, ProviderFault> {
        timed(self.inner.chain_id(), self.timeout_ms).await
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderFault> {
        timed(self.inner.switch_chain(chain_id), self.timeout_ms).await
    }

    async fn add_chain(&self, network: &NetworkDescriptor) -> Result<(), ProviderFault> {
        timed(self.inner.add_chain(network), self.timeout_ms).await
    }
}
