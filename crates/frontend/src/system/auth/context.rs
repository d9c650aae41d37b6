use leptos::prelude::*;

use super::storage;

/// Client-side authentication state. The token is opaque: the console
/// only cares whether one is present.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

/// Auth context provider component. Restores the stored token on mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
