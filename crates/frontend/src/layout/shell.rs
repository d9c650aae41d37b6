use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::sidebar::Sidebar;
use super::topbar::Topbar;
use crate::system::auth::guard::RequireAuth;

/// Layout for every protected route: sidebar, topbar and the routed
/// page. Business state lives in the pages, never here.
#[component]
pub fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="layout">
                <Sidebar />
                <div class="layout__main">
                    <Topbar />
                    <main class="layout__content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
