//! Run controls: init, start and pause, enabled by the current status.

use leptos::prelude::*;
use rebuilder_domain::action::Action;
use rebuilder_domain::buttons::ButtonState;

#[component]
pub fn RunControls(
    /// Which buttons the current status allows.
    #[prop(into)]
    buttons: Signal<ButtonState>,
    /// Called with the action of the clicked button.
    on_action: Callback<Action>,
) -> impl IntoView {
    view! {
        <div class="run-controls">
            <button
                id="btn-init"
                disabled=move || !buttons.get().init
                on:click=move |_| on_action.run(Action::Init)
            >
                "Init"
            </button>
            <button
                id="btn-start"
                disabled=move || !buttons.get().start
                on:click=move |_| on_action.run(Action::Start)
            >
                "Start"
            </button>
            <button
                id="btn-pause"
                disabled=move || !buttons.get().pause
                on:click=move |_| on_action.run(Action::Stop)
            >
                "Pause"
            </button>
        </div>
    }
}
