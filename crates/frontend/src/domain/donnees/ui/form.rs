use contracts::domain::donnees::{Acces, Donnee, DonneeInput};
use contracts::domain::references::{Pays, Province, TypeDonnee};
use contracts::validation::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::use_api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{RadioGroup, Select, Textarea};
use crate::shared::icons::icon;

/// Modal form for creating or editing a dataset record.
///
/// Reference catalogs load concurrently on mount; attachments are only
/// stashed locally until submit, which sends everything as one multipart
/// request.
#[component]
pub fn DonneeForm<F1, F2>(record: Option<Donnee>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let api = StoredValue::new(use_api());

    let draft = record
        .as_ref()
        .map(DonneeInput::from_record)
        .unwrap_or_default();
    let is_edit = draft.id_donnee.is_some();
    let id_donnee = draft.id_donnee;

    let id_type = RwSignal::new(draft.id_type);
    let titre = RwSignal::new(draft.titre);
    let pays = RwSignal::new(draft.pays);
    let region = RwSignal::new(draft.region);
    let latitude = RwSignal::new(draft.latitude);
    let longitude = RwSignal::new(draft.longitude);
    let description = RwSignal::new(draft.description);
    let date_collecte = RwSignal::new(draft.date_collecte);
    let acces = RwSignal::new(draft.acces.as_str().to_string());
    let meta = RwSignal::new(draft.meta);

    let types = RwSignal::new(Vec::<TypeDonnee>::new());
    let pays_list = RwSignal::new(Vec::<Pays>::new());
    let provinces = RwSignal::new(Vec::<Province>::new());

    // Attachments stay local until submit. `File` handles are not
    // thread-safe, hence the local store.
    let fichier = StoredValue::new_local(None::<web_sys::File>);
    let vignette = StoredValue::new_local(None::<web_sys::File>);
    let fichier_name = RwSignal::new(record.as_ref().and_then(|r| r.fichier_url.clone()));
    let vignette_preview = RwSignal::new(
        record
            .as_ref()
            .and_then(|r| r.vignette_url.clone())
            .map(|url| format!("{}{}", api.get_value().base(), url)),
    );

    let errors: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());
    let (saving, set_saving) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    // The three catalogs load concurrently; a failed catalog leaves its
    // select empty but never blocks the form.
    {
        let client = api.get_value();
        spawn_local(async move {
            match client.list_types().await {
                Ok(data) => types.set(data),
                Err(e) => log::warn!("chargement des types: {}", e),
            }
        });
    }
    {
        let client = api.get_value();
        spawn_local(async move {
            match client.list_pays().await {
                Ok(data) => pays_list.set(data),
                Err(e) => log::warn!("chargement des pays: {}", e),
            }
        });
    }
    {
        let client = api.get_value();
        spawn_local(async move {
            match client.list_provinces().await {
                Ok(data) => provinces.set(data),
                Err(e) => log::warn!("chargement des provinces: {}", e),
            }
        });
    }

    let error_for = move |field: &'static str| {
        errors.with(|list| {
            list.iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    };

    let type_options = Signal::derive(move || {
        let mut opts = vec![(String::new(), "Sélectionnez un type...".to_string())];
        opts.extend(
            types
                .get()
                .into_iter()
                .map(|t| (t.id_type.to_string(), t.nom_type)),
        );
        opts
    });
    let pays_options = Signal::derive(move || {
        let mut opts = vec![(String::new(), "Sélectionnez un pays...".to_string())];
        opts.extend(
            pays_list
                .get()
                .into_iter()
                .map(|p| (p.id_pays.to_string(), p.nom_pays)),
        );
        opts
    });
    let province_options = Signal::derive(move || {
        let mut opts = vec![(String::new(), "Sélectionnez une province...".to_string())];
        opts.extend(
            provinces
                .get()
                .into_iter()
                .map(|p| (p.id.to_string(), p.name_fr)),
        );
        opts
    });

    let on_pick_fichier = move |ev: leptos::ev::Event| {
        let input_el = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input_el.files().and_then(|list| list.get(0)) {
            fichier_name.set(Some(file.name()));
            fichier.set_value(Some(file));
        }
    };
    let on_pick_vignette = move |ev: leptos::ev::Event| {
        let input_el = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input_el.files().and_then(|list| list.get(0)) {
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                vignette_preview.set(Some(url));
            }
            vignette.set_value(Some(file));
        }
    };

    let on_submit = move |_| {
        let input = DonneeInput {
            id_donnee,
            id_type: id_type.get(),
            titre: titre.get(),
            pays: pays.get(),
            region: region.get(),
            latitude: latitude.get(),
            longitude: longitude.get(),
            description: description.get(),
            date_collecte: date_collecte.get(),
            acces: if acces.get() == "public" {
                Acces::Public
            } else {
                Acces::Abonne
            },
            meta: meta.get(),
        };

        // Validation gates the network call entirely.
        match input.validate() {
            Err(list) => {
                errors.set(list);
            }
            Ok(()) => {
                errors.set(Vec::new());
                set_saving.set(true);
                set_submit_error.set(None);
                let client = api.get_value();
                let file = fichier.get_value();
                let thumb = vignette.get_value();
                spawn_local(async move {
                    match client.save_donnee(&input, file, thumb).await {
                        Ok(()) => on_saved(),
                        Err(e) => {
                            log::error!("enregistrement de la donnée: {}", e);
                            set_submit_error
                                .set(Some("Impossible de sauvegarder la donnée".to_string()));
                            set_saving.set(false);
                        }
                    }
                });
            }
        }
    };

    let saving_sig = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_edit { "Modifier une donnée" } else { "Ajouter une donnée" }}
                    </h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__row">
                        <Select
                            label="Type de donnée"
                            value=Signal::derive(move || id_type.get())
                            on_change=Callback::new(move |v| id_type.set(v))
                            options=type_options
                            error=Signal::derive(move || error_for("id_type"))
                            disabled=false
                            required=true
                        />
                        <div class="form__group">
                            <Label>"Titre"</Label>
                            <Input
                                value=titre
                                placeholder="Titre de la donnée"
                                disabled=saving_sig
                            />
                            {move || error_for("titre").map(|e| view! { <div class="form__error">{e}</div> })}
                        </div>
                    </div>

                    <div class="form__row">
                        <Select
                            label="Pays"
                            value=Signal::derive(move || pays.get())
                            on_change=Callback::new(move |v| pays.set(v))
                            options=pays_options
                        />
                        <Select
                            label="Région"
                            value=Signal::derive(move || region.get())
                            on_change=Callback::new(move |v| region.set(v))
                            options=province_options
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Latitude"</Label>
                            <Input
                                value=latitude
                                placeholder="Ex: 4.345678"
                                disabled=saving_sig
                            />
                            {move || error_for("latitude").map(|e| view! { <div class="form__error">{e}</div> })}
                        </div>
                        <div class="form__group">
                            <Label>"Longitude"</Label>
                            <Input
                                value=longitude
                                placeholder="Ex: 15.345678"
                                disabled=saving_sig
                            />
                            {move || error_for("longitude").map(|e| view! { <div class="form__error">{e}</div> })}
                        </div>
                    </div>

                    <Textarea
                        label="Description"
                        value=Signal::derive(move || description.get())
                        on_input=Callback::new(move |v| description.set(v))
                        placeholder="Description détaillée..."
                        rows=4
                    />

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Date collecte"</Label>
                            <DateInput
                                value=Signal::derive(move || date_collecte.get())
                                on_change=move |v| date_collecte.set(v)
                                disabled=false
                            />
                            {move || error_for("date_collecte").map(|e| view! { <div class="form__error">{e}</div> })}
                        </div>
                        <RadioGroup
                            label="Accès"
                            value=Signal::derive(move || acces.get())
                            on_change=Callback::new(move |v| acces.set(v))
                            name="acces"
                            options=Signal::derive(|| vec![
                                ("public".to_string(), "Public".to_string()),
                                ("abonne".to_string(), "Abonné".to_string()),
                            ])
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Fichier"</Label>
                            <label class="form__upload">
                                {icon("upload")}
                                " Téléverser le fichier"
                                <input type="file" class="form__file-input" on:change=on_pick_fichier />
                            </label>
                            {move || fichier_name.get().map(|name| view! {
                                <div class="form__file-name">{name}</div>
                            })}
                        </div>
                        <div class="form__group">
                            <Label>"Vignette"</Label>
                            <label class="form__upload">
                                {icon("upload")}
                                " Téléverser la vignette"
                                <input type="file" class="form__file-input" accept="image/*" on:change=on_pick_vignette />
                            </label>
                            {move || vignette_preview.get().map(|url| view! {
                                <img src=url alt="Vignette" width="100" class="form__thumbnail" />
                            })}
                        </div>
                    </div>

                    <Textarea
                        label="Meta (JSON)"
                        value=Signal::derive(move || meta.get())
                        on_input=Callback::new(move |v| meta.set(v))
                        placeholder=r#"{"key":"value"}"#
                        error=Signal::derive(move || error_for("meta"))
                        rows=3
                    />
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=saving_sig
                    >
                        "Annuler"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=saving_sig
                    >
                        {move || {
                            if saving.get() {
                                "Enregistrement..."
                            } else if is_edit {
                                "Mettre à jour"
                            } else {
                                "Ajouter"
                            }
                        }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
