use leptos::prelude::*;

use crate::shared::icons::icon;

/// Static header bar: brand block on the left, notification shortcuts
/// and the operator chip on the right. Holds no state.
#[component]
pub fn Topbar() -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="topbar__left">
                <span class="topbar__brand">"GéoData"</span>
            </div>

            <div class="topbar__right">
                <button class="icon-btn" aria-label="Notifications">
                    {icon("bell")}
                </button>
                <button class="icon-btn" aria-label="Messages">
                    {icon("mail")}
                </button>
                <div class="topbar__user">
                    <span class="topbar__user-name">"Acha"</span>
                    <span class="topbar__user-role">"Admin"</span>
                </div>
            </div>
        </header>
    }
}
