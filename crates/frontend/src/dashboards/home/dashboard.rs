use contracts::stats::{MonthlyAmount, MonthlyUsers};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::use_api;
use crate::shared::collection::FetchSeq;
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::stat_card::StatCard;

const STATS_ERROR: &str = "Impossible de charger les statistiques";

/// Overview dashboard: three counters and two monthly charts.
///
/// The five aggregate calls run concurrently; the page shows a single
/// spinner until the whole group has settled. A failed call leaves its
/// widget at the empty default and raises one error notification, the
/// other widgets still render their data.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let users_count = RwSignal::new(None::<u64>);
    let payments_count = RwSignal::new(None::<u64>);
    let donnees_count = RwSignal::new(None::<u64>);
    let payments_series = RwSignal::new(Vec::<MonthlyAmount>::new());
    let users_series = RwSignal::new(Vec::<MonthlyUsers>::new());

    let pending = RwSignal::new(0usize);
    let (error, set_error) = signal(None::<String>);

    let seq = FetchSeq::new();
    on_cleanup(move || seq.invalidate());

    let load_stats = move || {
        let my_seq = seq.begin();
        pending.set(5);
        set_error.set(None);

        {
            let client = api.get_value();
            spawn_local(async move {
                let result = client.count_utilisateurs().await;
                if !seq.is_current(my_seq) {
                    return;
                }
                match result {
                    Ok(c) => users_count.set(Some(c.count)),
                    Err(e) => {
                        log::error!("nombre d'utilisateurs: {}", e);
                        set_error.set(Some(STATS_ERROR.to_string()));
                    }
                }
                pending.update(|p| *p = p.saturating_sub(1));
            });
        }
        {
            let client = api.get_value();
            spawn_local(async move {
                let result = client.count_paiements().await;
                if !seq.is_current(my_seq) {
                    return;
                }
                match result {
                    Ok(c) => payments_count.set(Some(c.count)),
                    Err(e) => {
                        log::error!("nombre de paiements: {}", e);
                        set_error.set(Some(STATS_ERROR.to_string()));
                    }
                }
                pending.update(|p| *p = p.saturating_sub(1));
            });
        }
        {
            let client = api.get_value();
            spawn_local(async move {
                let result = client.count_donnees().await;
                if !seq.is_current(my_seq) {
                    return;
                }
                match result {
                    Ok(c) => donnees_count.set(Some(c.count)),
                    Err(e) => {
                        log::error!("nombre de données: {}", e);
                        set_error.set(Some(STATS_ERROR.to_string()));
                    }
                }
                pending.update(|p| *p = p.saturating_sub(1));
            });
        }
        {
            let client = api.get_value();
            spawn_local(async move {
                let result = client.paiement_stat().await;
                if !seq.is_current(my_seq) {
                    return;
                }
                match result {
                    Ok(series) => payments_series.set(series),
                    Err(e) => {
                        log::error!("série des paiements: {}", e);
                        set_error.set(Some(STATS_ERROR.to_string()));
                    }
                }
                pending.update(|p| *p = p.saturating_sub(1));
            });
        }
        {
            let client = api.get_value();
            spawn_local(async move {
                let result = client.utilisateur_stat().await;
                if !seq.is_current(my_seq) {
                    return;
                }
                match result {
                    Ok(series) => users_series.set(series),
                    Err(e) => {
                        log::error!("série des utilisateurs: {}", e);
                        set_error.set(Some(STATS_ERROR.to_string()));
                    }
                }
                pending.update(|p| *p = p.saturating_sub(1));
            });
        }
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            load_stats();
        }
    });

    let payments_points = Signal::derive(move || {
        payments_series
            .get()
            .into_iter()
            .map(|m| (m.month, m.amount))
            .collect::<Vec<_>>()
    });
    let users_points = Signal::derive(move || {
        users_series
            .get()
            .into_iter()
            .map(|m| (m.month, m.users as f64))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page page--dashboard" id="home--dashboard">
            {move || {
                if pending.get() > 0 {
                    view! {
                        <div class="page__spinner page__spinner--full">
                            <Spinner />
                            <span>"Chargement des statistiques..."</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="dashboard">
                            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                            <div class="dashboard__cards">
                                <StatCard
                                    label="Utilisateurs"
                                    icon_name="users"
                                    value=Signal::derive(move || users_count.get())
                                    accent="info"
                                />
                                <StatCard
                                    label="Paiements"
                                    icon_name="dollar"
                                    value=Signal::derive(move || payments_count.get())
                                    accent="success"
                                />
                                <StatCard
                                    label="Données"
                                    icon_name="file-text"
                                    value=Signal::derive(move || donnees_count.get())
                                    accent="warning"
                                />
                            </div>

                            <div class="dashboard__charts">
                                <div class="chart-card">
                                    <h3 class="chart-card__title">"Montant des paiements par mois"</h3>
                                    {move || {
                                        if payments_points.get().is_empty() {
                                            view! {
                                                <div class="chart-placeholder">
                                                    "Aucune donnée de paiement"
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            view! { <BarChart points=payments_points /> }.into_any()
                                        }
                                    }}
                                </div>
                                <div class="chart-card">
                                    <h3 class="chart-card__title">"Nouvel utilisateur par mois"</h3>
                                    {move || {
                                        if users_points.get().is_empty() {
                                            view! {
                                                <div class="chart-placeholder">
                                                    "Aucune donnée d'utilisateur"
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            view! { <LineChart points=users_points /> }.into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
