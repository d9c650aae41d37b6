use leptos::prelude::*;

/// Native date picker. The browser displays the date in locale format;
/// the value travels as `yyyy-mm-dd`.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__date-input"
            prop:value=value
            disabled=disabled
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
