//! Slider with a label that follows the value as it is dragged.

use leptos::prelude::*;
use rebuilder_domain::settings::parse_slider;

#[component]
pub fn RangeField(
    /// Element id of the input; the label gets `{id}-value`.
    #[prop(into)]
    id: String,
    /// Caption shown above the slider.
    #[prop(into)]
    caption: String,
    min: u32,
    max: u32,
    #[prop(default = 1)]
    step: u32,
    /// Current value.
    #[prop(into)]
    value: Signal<u32>,
    /// Renders the value for the label, e.g. `"25 frames"`.
    describe: fn(u32) -> String,
    /// Called with every new value while the slider moves.
    on_input: Callback<u32>,
) -> impl IntoView {
    let label_id = format!("{id}-value");

    view! {
        <div class="range-field">
            <label for=id.clone()>{caption}</label>
            <input
                type="range"
                id=id
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let previous = value.get_untracked();
                    on_input.run(parse_slider(&event_target_value(&ev), previous));
                }
            />
            <span id=label_id>{move || describe(value.get())}</span>
        </div>
    }
}
