//! Transient status banner fed by the session toast signal.

use leptos::prelude::*;

use crate::state::session::{use_session_context, ToastKind};

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        {move || {
            ctx.toast.get().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                view! {
                    <div class=class>
                        <p>{toast.text}</p>
                        <button class="toast-dismiss" on:click=move |_| ctx.dismiss_toast()>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
