//! Voting page: wallet connection entry point and the ballot.

use leptos::prelude::*;

use crate::services::session::use_connection;
use crate::services::voting::{self, Proposal};
use crate::state::session::use_session_context;

#[component]
pub fn VotePage() -> impl IntoView {
    let ctx = use_session_context();
    let connection = use_connection();

    let (connecting, set_connecting) = signal(false);

    // Re-checked whenever the account changes, including provider-side
    // account switches delivered through the event bridge.
    let has_voted = Memo::new(move |_| {
        ctx.wallet
            .with(|view| view.address().map(voting::has_voted).unwrap_or(false))
    });

    let connect = {
        let connection = connection.clone();
        move |_| {
            if connecting.get_untracked() {
                return;
            }
            set_connecting.set(true);
            let connection = connection.clone();
            leptos::task::spawn_local(async move {
                // Failures are already surfaced through the session hooks.
                if let Err(err) = connection.connect().await {
                    log::warn!("connect failed: {err}");
                }
                set_connecting.set(false);
            });
        }
    };

    let retry_network = {
        let connection = connection.clone();
        move |_| {
            let connection = connection.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = connection.network().verify().await {
                    log::warn!("network verification failed: {err}");
                }
            });
        }
    };

    let connect_button = move || {
        (!ctx.wallet.with(|view| view.is_connected())).then(|| {
            view! {
                <button
                    class="btn"
                    disabled=move || connecting.get()
                    on:click=connect.clone()
                >
                    {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
                </button>
            }
        })
    };

    let switch_button = move || {
        ctx.wallet
            .with(|view| view.is_connected() && !view.network_verified())
            .then(|| {
                view! {
                    <button class="btn secondary" on:click=retry_network.clone()>
                        "Switch to Sepolia"
                    </button>
                }
            })
    };

    view! {
        <main class="content">
            <section class="hero">
                <h1>"BlockVote"</h1>
                <p class="subtitle">"Transparent voting on the Sepolia testnet"</p>
                {connect_button}
                {switch_button}
            </section>

            <section class="ballot">
                <h2>"Open proposals"</h2>
                {voting::open_proposals()
                    .into_iter()
                    .map(|proposal| view! { <ProposalCard proposal has_voted/> })
                    .collect::<Vec<_>>()}
            </section>
        </main>
    }
}

#[component]
fn ProposalCard(proposal: Proposal, has_voted: Memo<bool>) -> impl IntoView {
    let ctx = use_session_context();
    let proposal_id = proposal.id;

    let cast_vote = move |_| {
        let account = ctx.wallet.with(|view| view.address().map(str::to_string));
        let Some(account) = account else {
            ctx.show_error("Connect your wallet to vote.");
            return;
        };
        leptos::task::spawn_local(async move {
            match voting::submit_vote(&account, proposal_id).await {
                Ok(tx_hash) => ctx.show_success(&format!("Vote submitted: {tx_hash}")),
                Err(message) => ctx.show_error(&message),
            }
        });
    };

    view! {
        <div class="card proposal">
            <h3>{proposal.title}</h3>
            <p>{proposal.summary}</p>
            <button class="btn" disabled=move || has_voted.get() on:click=cast_vote>
                {move || if has_voted.get() { "Already voted" } else { "Vote" }}
            </button>
        </div>
    }
}
