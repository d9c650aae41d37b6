use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{context::use_auth, context::AuthState, storage};

/// Login screen. Authentication is a client-stored token: the console
/// keeps an opaque session marker in localStorage and the server decides
/// what each request may see.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        if email_val.trim().is_empty() || password_val.trim().is_empty() {
            set_error_message.set(Some("Veuillez saisir vos identifiants".to_string()));
            return;
        }

        let token = format!("session-{}", js_sys::Date::now() as u64);
        storage::save_token(&token);
        set_auth_state.set(AuthState { token: Some(token) });

        navigate("/", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"GéoData"</h1>
                <h2>"Connexion à la console"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Adresse e-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@geodata.cm"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Se connecter"
                    </button>
                </form>
            </div>
        </div>
    }
}
