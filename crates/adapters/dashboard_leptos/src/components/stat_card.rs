//! Stat card component for displaying a labelled value.

use leptos::prelude::*;

/// A card displaying a label and a live text value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Element id of the value, so it can be found in the page.
    #[prop(into)]
    id: String,
    /// The value to display.
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value" id=id>{move || value.get()}</span>
        </div>
    }
}
