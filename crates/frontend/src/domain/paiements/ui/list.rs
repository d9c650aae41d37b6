use contracts::domain::paiements::{Paiement, PaymentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::PaiementDetails;
use crate::shared::api::use_api;
use crate::shared::collection::{FetchSeq, ListState, SortByField};
use crate::shared::components::data_table::{ColumnDef, DataTable};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

const TABLE_ID: &str = "paiements-table";
const PAGE_SIZE: usize = 10;

impl SortByField for Paiement {
    fn compare_by(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "payment_date" => self
                .payment_date
                .as_deref()
                .unwrap_or("")
                .cmp(other.payment_date.as_deref().unwrap_or("")),
            _ => self.nom.to_lowercase().cmp(&other.nom.to_lowercase()),
        }
    }
}

/// Badge class and label for a payment status: success is green, failed
/// red, pending orange. Deterministic per value.
pub fn status_badge(status: PaymentStatus) -> (&'static str, &'static str) {
    match status {
        PaymentStatus::Success => ("badge badge--success", "SUCCESS"),
        PaymentStatus::Failed => ("badge badge--error", "FAILED"),
        PaymentStatus::Pending => ("badge badge--warning", "PENDING"),
    }
}

fn columns(selected: RwSignal<Option<Paiement>>) -> Vec<ColumnDef<Paiement>> {
    vec![
        ColumnDef::new("index", "#", 50.0, |index, _: &Paiement| {
            view! { <span style="font-weight: 500;">{(index + 1).to_string()}</span> }.into_any()
        }),
        ColumnDef::new("nom", "Utilisateur", 140.0, |_, p: &Paiement| {
            view! { <span>{p.nom.clone()}</span> }.into_any()
        })
        .sortable(),
        ColumnDef::new("name", "Abonnement", 120.0, |_, p: &Paiement| {
            view! { <span class="badge badge--info">{p.name.clone()}</span> }.into_any()
        }),
        ColumnDef::new("amount", "Montant", 110.0, |_, p: &Paiement| {
            view! {
                <span class="amount">
                    {icon("dollar")}
                    <span style="font-weight: 600;">{format_money(p.amount)}</span>
                </span>
            }
            .into_any()
        }),
        ColumnDef::new("payment_method", "Méthode", 120.0, |_, p: &Paiement| {
            view! { <span class="badge badge--neutral">{p.payment_method.clone()}</span> }
                .into_any()
        }),
        ColumnDef::new("transaction_id", "Transaction ID", 140.0, |_, p: &Paiement| {
            view! { <code>{p.transaction_id.clone()}</code> }.into_any()
        }),
        ColumnDef::new("payment_date", "Date paiement", 140.0, |_, p: &Paiement| {
            view! { <span>{format_datetime_opt(p.payment_date.as_deref())}</span> }.into_any()
        })
        .sortable(),
        ColumnDef::new("status", "Statut", 100.0, |_, p: &Paiement| {
            let (class, label) = status_badge(p.status);
            view! { <span class=class>{label}</span> }.into_any()
        }),
        ColumnDef::new("actions", "Actions", 80.0, move |_, p: &Paiement| {
            let record = p.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| selected.set(Some(record.clone()))
                    attr:title="Voir détails"
                >
                    {icon("eye")}
                </Button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn PaiementsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = RwSignal::new(ListState::<Paiement>::new("nom", PAGE_SIZE));
    let all_rows: RwSignal<Vec<Paiement>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let status_filter = RwSignal::new(String::new());
    let selected: RwSignal<Option<Paiement>> = RwSignal::new(None);

    let seq = FetchSeq::new();
    on_cleanup(move || seq.invalidate());

    let refresh_view = move || {
        let filter = status_filter.get_untracked();
        let mut data = all_rows.get_untracked();
        if !filter.is_empty() {
            data.retain(|p| p.status.as_str() == filter);
        }
        state.update(|s| s.rebuild(data));
    };

    let load_data = move || {
        let my_seq = seq.begin();
        set_loading.set(true);
        set_error.set(None);
        let client = api.get_value();
        spawn_local(async move {
            let result = client.list_paiements().await;
            if !seq.is_current(my_seq) {
                return;
            }
            match result {
                Ok(data) => {
                    all_rows.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => {
                    log::error!("chargement des paiements: {}", e);
                    set_error.set(Some("Impossible de charger les paiements".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_sort = Callback::new(move |field: &'static str| {
        state.update(|s| s.toggle_sort(field));
        refresh_view();
    });
    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };
    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };
    let on_filter_change = Callback::new(move |value: String| {
        status_filter.set(value);
        state.update(|s| s.page = 0);
        refresh_view();
    });

    let items_signal = Signal::derive(move || state.get().items.clone());
    let cols = columns(selected);

    let filter_options = Signal::derive(|| {
        std::iter::once((String::new(), "Tous les statuts".to_string()))
            .chain(
                PaymentStatus::ALL
                    .iter()
                    .map(|s| (s.as_str().to_string(), status_badge(*s).1.to_string())),
            )
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page" id="paiements--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tableau des Paiements"</h1>
                    <p class="page__subtitle">"Suivi des transactions financières et abonnements."</p>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Chargement..." } else { " Rafraîchir" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="page__toolbar">
                    <div class="page__toolbar-left">
                        {icon("filter")}
                        <Select
                            value=Signal::derive(move || status_filter.get())
                            on_change=on_filter_change
                            options=filter_options
                        />
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(move || state.get().total_pages)
                        total_count=Signal::derive(move || state.get().total_count)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                        page_size_options=vec![10, 20, 50]
                    />
                </div>

                {move || {
                    if loading.get() && !state.with(|s| s.is_loaded) {
                        view! {
                            <div class="page__spinner">
                                <Spinner />
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <DataTable
                                table_id=TABLE_ID
                                columns=cols.clone()
                                items=items_signal
                                sort_field=Signal::derive(move || state.get().sort_field.clone())
                                sort_ascending=Signal::derive(move || state.get().sort_ascending)
                                on_sort=on_sort
                                row_key=|p: &Paiement| p.id_payments.to_string()
                            />
                        }
                        .into_any()
                    }
                }}

                {move || selected.get().map(|paiement| view! {
                    <PaiementDetails
                        paiement=paiement
                        on_close=move || selected.set(None)
                    />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badge_mapping_is_deterministic() {
        assert_eq!(
            status_badge(PaymentStatus::Success),
            ("badge badge--success", "SUCCESS")
        );
        assert_eq!(
            status_badge(PaymentStatus::Failed),
            ("badge badge--error", "FAILED")
        );
        assert_eq!(
            status_badge(PaymentStatus::Pending),
            ("badge badge--warning", "PENDING")
        );
    }

    #[test]
    fn paiements_sort_by_date_handles_missing_values() {
        let a = sample("a", None);
        let b = sample("b", Some("2026-01-15T10:00:00Z"));
        assert_eq!(a.compare_by(&b, "payment_date"), std::cmp::Ordering::Less);
    }

    fn sample(nom: &str, date: Option<&str>) -> Paiement {
        Paiement {
            id_payments: 1,
            nom: nom.into(),
            name: "Premium".into(),
            amount: 25.0,
            payment_method: "orange_money".into(),
            transaction_id: "TX-1".into(),
            payment_date: date.map(Into::into),
            status: PaymentStatus::Success,
        }
    }
}
