use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"La page demandée n'existe pas."</p>
            <A href="/">"Retour à l'accueil"</A>
        </div>
    }
}
