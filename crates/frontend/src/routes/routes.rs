use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::home::HomeDashboard;
use crate::domain::donnees::ui::DonneesPage;
use crate::domain::paiements::ui::PaiementsPage;
use crate::domain::utilisateurs::ui::UtilisateursPage;
use crate::layout::shell::ProtectedShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=HomeDashboard />
                    <Route path=path!("donnees") view=DonneesPage />
                    <Route path=path!("paiement") view=PaiementsPage />
                    <Route path=path!("utilisateurs") view=UtilisateursPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
