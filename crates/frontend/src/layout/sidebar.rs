use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::icons::icon;
use crate::system::auth::{context::use_auth, context::AuthState, storage};

struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 4] = [
    MenuItem {
        path: "/",
        label: "Accueil",
        icon: "home",
    },
    MenuItem {
        path: "/donnees",
        label: "Données",
        icon: "database",
    },
    MenuItem {
        path: "/paiement",
        label: "Paiement",
        icon: "credit-card",
    },
    MenuItem {
        path: "/utilisateurs",
        label: "Utilisateurs",
        icon: "users",
    },
];

/// Navigation sidebar. The active item derives from the current route;
/// logging out clears the stored token and returns to the login screen
/// without any server call.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let (_, set_auth_state) = use_auth();
    let navigate_logout = use_navigate();

    let logout = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
        navigate_logout("/login", Default::default());
    };

    view! {
        <aside class="sidebar">
            <nav class="sidebar__menu">
                {MENU
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        let navigate = use_navigate();
                        view! {
                            <div
                                class=move || {
                                    if pathname.get() == path {
                                        "menu-item menu-item--active"
                                    } else {
                                        "menu-item"
                                    }
                                }
                                on:click=move |_| navigate(path, Default::default())
                            >
                                <span class="menu-item__icon">{icon(item.icon)}</span>
                                <span class="menu-item__label">{item.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="menu-item menu-item--danger" on:click=logout>
                    <span class="menu-item__icon">{icon("logout")}</span>
                    <span class="menu-item__label">"Déconnexion"</span>
                </div>
            </nav>
        </aside>
    }
}
