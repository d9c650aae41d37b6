use contracts::domain::utilisateurs::{Role, Utilisateur};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UtilisateurDetails;
use crate::shared::api::use_api;
use crate::shared::collection::{FetchSeq, ListState, SortByField};
use crate::shared::components::data_table::{ColumnDef, DataTable};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::{format_date_opt, format_datetime};
use crate::shared::icons::icon;

const TABLE_ID: &str = "utilisateurs-table";
const PAGE_SIZE: usize = 8;

impl SortByField for Utilisateur {
    fn compare_by(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.nom.to_lowercase().cmp(&other.nom.to_lowercase()),
        }
    }
}

/// Badge class and label for a role: admins are red, subscribers blue.
pub fn role_badge(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Admin => ("badge badge--error", "ADMIN"),
        Role::Abonne => ("badge badge--info", "ABONNE"),
    }
}

fn columns(selected: RwSignal<Option<Utilisateur>>) -> Vec<ColumnDef<Utilisateur>> {
    vec![
        ColumnDef::new("nom", "Nom", 140.0, |_, u: &Utilisateur| {
            view! {
                <span class="cell-with-icon">
                    {icon("user")}
                    <span style="font-weight: 500;">{u.nom.clone()}</span>
                </span>
            }
            .into_any()
        })
        .sortable(),
        ColumnDef::new("email", "Email", 180.0, |_, u: &Utilisateur| {
            view! {
                <span class="cell-with-icon">
                    {icon("mail")}
                    <span>{u.email.clone()}</span>
                </span>
            }
            .into_any()
        }),
        ColumnDef::new("phone", "Téléphone", 120.0, |_, u: &Utilisateur| {
            match &u.phone {
                Some(phone) => view! {
                    <span class="cell-with-icon">
                        {icon("phone")}
                        <span>{phone.clone()}</span>
                    </span>
                }
                .into_any(),
                None => view! { <span>"—"</span> }.into_any(),
            }
        }),
        ColumnDef::new("role", "Rôle", 90.0, |_, u: &Utilisateur| {
            let (class, label) = role_badge(u.role);
            view! { <span class=class>{label}</span> }.into_any()
        }),
        ColumnDef::new("abonnement_expires_le", "Expiration", 110.0, |_, u: &Utilisateur| {
            view! { <span>{format_date_opt(u.abonnement_expires_le.as_deref())}</span> }
                .into_any()
        }),
        ColumnDef::new("created_at", "Créé le", 140.0, |_, u: &Utilisateur| {
            view! { <span>{format_datetime(&u.created_at)}</span> }.into_any()
        })
        .sortable(),
        ColumnDef::new("actions", "Actions", 80.0, move |_, u: &Utilisateur| {
            let record = u.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| selected.set(Some(record.clone()))
                    attr:title="Voir / Modifier"
                >
                    {icon("eye")}
                </Button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn UtilisateursPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = RwSignal::new(ListState::<Utilisateur>::new("nom", PAGE_SIZE));
    let all_rows: RwSignal<Vec<Utilisateur>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let role_filter = RwSignal::new(String::new());
    let selected: RwSignal<Option<Utilisateur>> = RwSignal::new(None);
    let (show_create, set_show_create) = signal(false);

    let seq = FetchSeq::new();
    on_cleanup(move || seq.invalidate());

    let refresh_view = move || {
        let filter = role_filter.get_untracked();
        let mut data = all_rows.get_untracked();
        if !filter.is_empty() {
            data.retain(|u| u.role.as_str() == filter);
        }
        state.update(|s| s.rebuild(data));
    };

    let load_data = move || {
        let my_seq = seq.begin();
        set_loading.set(true);
        set_error.set(None);
        let client = api.get_value();
        spawn_local(async move {
            let result = client.list_utilisateurs().await;
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
                    log::error!("chargement des utilisateurs: {}", e);
                    set_error.set(Some(
                        "Impossible de charger la liste des utilisateurs".to_string(),
                    ));
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
        role_filter.set(value);
        state.update(|s| s.page = 0);
        refresh_view();
    });

    let items_signal = Signal::derive(move || state.get().items.clone());
    let cols = columns(selected);

    let filter_options = Signal::derive(|| {
        vec![
            (String::new(), "Tous les rôles".to_string()),
            ("admin".to_string(), "Admin".to_string()),
            ("abonne".to_string(), "Abonné".to_string()),
        ]
    });

    view! {
        <div class="page" id="utilisateurs--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestion des Utilisateurs"</h1>
                    <p class="page__subtitle">"Liste complète des utilisateurs avec rôles et abonnements."</p>
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
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " Nouvel utilisateur"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="page__toolbar">
                    <div class="page__toolbar-left">
                        {icon("filter")}
                        <Select
                            value=Signal::derive(move || role_filter.get())
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
                        page_size_options=vec![8, 16, 32]
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
                                row_key=|u: &Utilisateur| u.id_utilisateur.to_string()
                            />
                        }
                        .into_any()
                    }
                }}

                {move || selected.get().map(|utilisateur| view! {
                    <UtilisateurDetails
                        utilisateur=utilisateur
                        on_close=move || selected.set(None)
                    />
                })}

                // User creation lives in the subscriber signup flow; the
                // console only announces that here.
                {move || {
                    if show_create.get() {
                        Some(view! {
                            <div class="modal-overlay" on:click=move |_| set_show_create.set(false)>
                                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                                    <div class="modal-header">
                                        <h2 class="modal-title">"Nouvel utilisateur"</h2>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| set_show_create.set(false)
                                        >
                                            {icon("x")}
                                        </Button>
                                    </div>
                                    <div class="modal-body">
                                        <p class="text-muted">
                                            "Le formulaire d'ajout d'utilisateur est désactivé pour l'instant."
                                        </p>
                                    </div>
                                </div>
                            </div>
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
    fn role_badge_mapping_is_deterministic() {
        assert_eq!(role_badge(Role::Admin), ("badge badge--error", "ADMIN"));
        assert_eq!(role_badge(Role::Abonne), ("badge badge--info", "ABONNE"));
    }

    #[test]
    fn utilisateurs_sort_by_creation_date() {
        let a = sample("a", "2025-01-01T08:00:00Z");
        let b = sample("b", "2026-01-01T08:00:00Z");
        assert_eq!(a.compare_by(&b, "created_at"), std::cmp::Ordering::Less);
    }

    fn sample(nom: &str, created: &str) -> Utilisateur {
        Utilisateur {
            id_utilisateur: 1,
            nom: nom.into(),
            email: "a@exemple.cm".into(),
            phone: None,
            role: Role::Abonne,
            abonnement_expires_le: None,
            created_at: created.into(),
        }
    }
}
