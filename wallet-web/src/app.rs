//! BlockVote Leptos application root.

use leptos::prelude::*;

use crate::components::{Navbar, ToastBanner};
use crate::pages::VotePage;
use crate::services::session;
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_session_context();

    // One session stack per page load: the connection manager plus the
    // event bridge listening for provider notifications.
    let connection = session::start(ctx);
    provide_context(connection);

    view! {
        <div class="app-container">
            <Navbar/>
            <ToastBanner/>
            <VotePage/>
        </div>
    }
}
