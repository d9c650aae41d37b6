use contracts::domain::utilisateurs::Utilisateur;
use leptos::prelude::*;
use thaw::*;

use super::list::role_badge;
use crate::shared::date_utils::{format_date_opt, format_datetime};
use crate::shared::icons::icon;

/// Read-only detail panel for one user account.
#[component]
pub fn UtilisateurDetails<F>(utilisateur: Utilisateur, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let (role_class, role_label) = role_badge(utilisateur.role);
    let expiration = format_date_opt(utilisateur.abonnement_expires_le.as_deref());
    let created = format_datetime(&utilisateur.created_at);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Détails de l'utilisateur"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="detail-row">
                        <span class="detail-row__label">"Nom"</span>
                        <span class="detail-row__value" style="font-weight: 500;">
                            {utilisateur.nom.clone()}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Email"</span>
                        <span class="detail-row__value">{utilisateur.email.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Téléphone"</span>
                        <span class="detail-row__value">
                            {utilisateur.phone.clone().unwrap_or_else(|| "—".to_string())}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Rôle"</span>
                        <span class=role_class>{role_label}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Expiration"</span>
                        <span class="detail-row__value">{expiration}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Créé le"</span>
                        <span class="detail-row__value">{created}</span>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close()>
                        "Fermer"
                    </Button>
                </div>
            </div>
        </div>
    }
}
