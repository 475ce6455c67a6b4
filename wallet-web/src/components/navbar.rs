//! Navigation bar with the wallet status display.

use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <nav>
            <div class="nav-inner">
                <span class="nav-title">
                    <span class="brand-accent">"Block"</span><span class="brand-plain">"Vote"</span>
                </span>
                <div class="wallet-info">
                    {move || {
                        let view = ctx.wallet.get();
                        if view.is_connected() {
                            let network = view.network_label();
                            view! {
                                <div class="wallet-status">
                                    <span class="wallet-address">
                                        {format!("Connected: {}", view.display_name())}
                                    </span>
                                    <span class="network-info">{format!("Network: {network}")}</span>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <span class="wallet-address">"Not connected"</span> }.into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
