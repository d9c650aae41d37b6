use contracts::domain::paiements::Paiement;
use leptos::prelude::*;
use thaw::*;

use super::list::status_badge;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Read-only detail panel for one payment. Payment creation is handled
/// by the subscriber-facing flow, not from this console.
#[component]
pub fn PaiementDetails<F>(paiement: Paiement, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let (status_class, status_label) = status_badge(paiement.status);
    let date = format_datetime_opt(paiement.payment_date.as_deref());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Détails du paiement"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="detail-row">
                        <span class="detail-row__label">"Utilisateur"</span>
                        <span class="detail-row__value">{paiement.nom.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Abonnement"</span>
                        <span class="badge badge--info">{paiement.name.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Montant"</span>
                        <span class="detail-row__value" style="font-weight: 600;">
                            {format_money(paiement.amount)}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Méthode"</span>
                        <span class="detail-row__value">{paiement.payment_method.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Transaction ID"</span>
                        <code>{paiement.transaction_id.clone()}</code>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Date paiement"</span>
                        <span class="detail-row__value">{date}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Statut"</span>
                        <span class=status_class>{status_label}</span>
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
