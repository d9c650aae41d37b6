use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // The server base address is resolved once here and injected through
    // context; nothing below this point reads ambient configuration.
    let config = AppConfig::from_browser();
    provide_context(ApiClient::new(config.server_base));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
