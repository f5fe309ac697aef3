use leptos::prelude::*;

/// Checkbox bound to one boolean setting.
#[component]
pub fn ToggleField(
    #[prop(into)] id: String,
    #[prop(into)] caption: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="toggle-field">
            <input
                type="checkbox"
                id=id.clone()
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <label for=id>{caption}</label>
        </div>
    }
}
