use contracts::domain::donnees::{Acces, Donnee};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::DonneeForm;
use crate::shared::api::use_api;
use crate::shared::collection::{FetchSeq, ListState, SortByField};
use crate::shared::components::data_table::{ColumnDef, DataTable};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;

const TABLE_ID: &str = "donnees-table";
const PAGE_SIZE: usize = 10;

impl SortByField for Donnee {
    fn compare_by(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "date_collecte" => self
                .date_collecte
                .as_deref()
                .unwrap_or("")
                .cmp(other.date_collecte.as_deref().unwrap_or("")),
            _ => self.titre.to_lowercase().cmp(&other.titre.to_lowercase()),
        }
    }
}

/// Badge class and label for an access level. The mapping is
/// deterministic per value: public records are green, subscriber-gated
/// records are blue.
pub fn acces_badge(acces: Acces) -> (&'static str, &'static str) {
    match acces {
        Acces::Public => ("badge badge--success", "PUBLIC"),
        Acces::Abonne => ("badge badge--info", "ABONNE"),
    }
}

fn columns(
    server_base: String,
    editing: RwSignal<Option<Donnee>>,
    set_show_form: WriteSignal<bool>,
) -> Vec<ColumnDef<Donnee>> {
    let file_base = server_base.clone();
    let thumb_base = server_base;

    vec![
        ColumnDef::new("titre", "Titre", 160.0, |_, d: &Donnee| {
            view! { <span style="font-weight: 500;">{d.titre.clone()}</span> }.into_any()
        })
        .sortable(),
        ColumnDef::new("pays", "Pays", 100.0, |_, d: &Donnee| {
            view! { <span>{d.pays.clone().unwrap_or_default()}</span> }.into_any()
        }),
        ColumnDef::new("region", "Région", 100.0, |_, d: &Donnee| {
            view! { <span>{d.region.clone().unwrap_or_default()}</span> }.into_any()
        }),
        ColumnDef::new("date_collecte", "Date collecte", 120.0, |_, d: &Donnee| {
            view! { <span>{format_date_opt(d.date_collecte.as_deref())}</span> }.into_any()
        })
        .sortable(),
        ColumnDef::new("acces", "Accès", 90.0, |_, d: &Donnee| {
            let (class, label) = acces_badge(d.acces);
            view! { <span class=class>{label}</span> }.into_any()
        }),
        ColumnDef::new("fichier", "Fichier", 110.0, move |_, d: &Donnee| {
            match &d.fichier_url {
                Some(url) => view! {
                    <a
                        href=format!("{}{}", file_base, url)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Télécharger"
                    </a>
                }
                .into_any(),
                None => view! { <span>"—"</span> }.into_any(),
            }
        }),
        ColumnDef::new("vignette", "Vignette", 100.0, move |_, d: &Donnee| {
            match &d.vignette_url {
                Some(url) => view! {
                    <img
                        src=format!("{}{}", thumb_base, url)
                        alt="Vignette"
                        width="80"
                        height="50"
                        class="table__thumbnail"
                    />
                }
                .into_any(),
                None => view! { <span>"—"</span> }.into_any(),
            }
        }),
        ColumnDef::new("actions", "Actions", 110.0, move |_, d: &Donnee| {
            let record = d.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        editing.set(Some(record.clone()));
                        set_show_form.set(true);
                    }
                    attr:title="Modifier la donnée"
                >
                    {icon("edit")}
                    " Modifier"
                </Button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn DonneesPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = RwSignal::new(ListState::<Donnee>::new("titre", PAGE_SIZE));
    let all_rows: RwSignal<Vec<Donnee>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<Donnee>> = RwSignal::new(None);

    let seq = FetchSeq::new();
    on_cleanup(move || seq.invalidate());

    let refresh_view = move || {
        let data = all_rows.get_untracked();
        state.update(|s| s.rebuild(data));
    };

    let load_data = move || {
        let my_seq = seq.begin();
        set_loading.set(true);
        set_error.set(None);
        let client = api.get_value();
        spawn_local(async move {
            let result = client.list_donnees().await;
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
                    log::error!("chargement des données: {}", e);
                    set_error.set(Some("Impossible de charger les données".to_string()));
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

    let items_signal = Signal::derive(move || state.get().items.clone());
    let cols = columns(api.get_value().base().to_string(), editing, set_show_form);

    view! {
        <div class="page" id="donnees--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tableau des Données"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
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
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {icon("plus")}
                        " Ajouter une donnée"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <div class="page__toolbar">
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
                                row_key=|d: &Donnee| d.id_donnee.to_string()
                            />
                        }
                        .into_any()
                    }
                }}

                {move || {
                    if show_form.get() {
                        let record = editing.get();
                        Some(view! {
                            <DonneeForm
                                record=record
                                on_close=move || set_show_form.set(false)
                                on_saved=move || {
                                    set_show_form.set(false);
                                    set_notice.set(Some("Donnée enregistrée".to_string()));
                                    load_data();
                                }
                            />
                        })
                    } else {
                        None
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acces_badge_mapping_is_deterministic() {
        assert_eq!(acces_badge(Acces::Public), ("badge badge--success", "PUBLIC"));
        assert_eq!(acces_badge(Acces::Abonne), ("badge badge--info", "ABONNE"));
    }

    #[test]
    fn donnees_sort_by_title_is_case_insensitive() {
        let a = sample("zèbres", None);
        let b = sample("Acacias", None);
        assert_eq!(a.compare_by(&b, "titre"), std::cmp::Ordering::Greater);
    }

    #[test]
    fn donnees_sort_by_date_is_chronological() {
        let a = sample("a", Some("2025-01-01"));
        let b = sample("b", Some("2025-06-01"));
        assert_eq!(a.compare_by(&b, "date_collecte"), std::cmp::Ordering::Less);
    }

    fn sample(titre: &str, date: Option<&str>) -> Donnee {
        Donnee {
            id_donnee: 1,
            titre: titre.into(),
            id_type: None,
            pays: None,
            region: None,
            latitude: None,
            longitude: None,
            description: None,
            date_collecte: date.map(Into::into),
            acces: Acces::Public,
            fichier_url: None,
            vignette_url: None,
            meta: None,
        }
    }
}
