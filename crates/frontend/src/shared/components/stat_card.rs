use leptos::prelude::*;

use crate::shared::format::format_thousands;
use crate::shared::icons::icon;

/// Dashboard counter tile. `None` means the value is not loaded (or its
/// fetch failed) and renders as a dash.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Counter value
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Visual accent, appended as a `stat-card--{accent}` modifier
    #[prop(optional)]
    accent: &'static str,
) -> impl IntoView {
    let card_class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", accent)
    };

    let formatted = move || match value.get() {
        Some(v) => format_thousands(v as i64),
        None => "—".to_string(),
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
