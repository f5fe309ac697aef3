//! Settings view: backend tuning knobs and system actions.

use leptos::prelude::*;
use rebuilder_app::config::SliderConfig;
use rebuilder_domain::action::Action;
use rebuilder_domain::settings::{Settings, confidence_label, timeout_label};

use crate::components::{RangeField, ToggleField};

fn flag(form: RwSignal<Settings>, read: fn(&Settings) -> bool) -> Signal<bool> {
    Signal::derive(move || form.with(read))
}

#[component]
pub fn SettingsPage(
    /// Form state; filled from `/settings` when the view is entered.
    form: RwSignal<Settings>,
    sliders: SliderConfig,
    on_save: Callback<()>,
    on_action: Callback<Action>,
) -> impl IntoView {
    view! {
        <section id="settings">
            <h1>"Settings"</h1>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <ToggleField
                    id="efficiency-mode"
                    caption="Efficiency mode"
                    checked=flag(form, |s| s.efficiency_mode)
                    on_toggle=Callback::new(move |on: bool| form.update(|s| s.efficiency_mode = on))
                />
                <ToggleField
                    id="fast-mode"
                    caption="Fast mode"
                    checked=flag(form, |s| s.fast_mode)
                    on_toggle=Callback::new(move |on: bool| form.update(|s| s.fast_mode = on))
                />
                <ToggleField
                    id="incremental-build"
                    caption="Incremental build"
                    checked=flag(form, |s| s.incremental_build)
                    on_toggle=Callback::new(move |on: bool| form.update(|s| s.incremental_build = on))
                />
                <RangeField
                    id="confidence"
                    caption="Confidence"
                    min=sliders.confidence_min
                    max=sliders.confidence_max
                    value=Signal::derive(move || form.with(|s| s.confidence))
                    describe=confidence_label
                    on_input=Callback::new(move |frames: u32| form.update(|s| s.confidence = frames))
                />
                <RangeField
                    id="recognition-timeout"
                    caption="Recognition timeout"
                    min=sliders.timeout_min
                    max=sliders.timeout_max
                    step=sliders.timeout_step
                    value=Signal::derive(move || form.with(|s| s.recognition_timeout))
                    describe=timeout_label
                    on_input=Callback::new(move |seconds: u32| {
                        form.update(|s| s.recognition_timeout = seconds);
                    })
                />
                <button type="submit" id="btn-save">"Save"</button>
            </form>
            <h2>"System"</h2>
            <div class="system-actions">
                <button id="btn-restart" on:click=move |_| on_action.run(Action::Restart)>
                    "Restart"
                </button>
                <button id="btn-reboot" on:click=move |_| on_action.run(Action::Reboot)>
                    "Reboot"
                </button>
                <button id="btn-reset" on:click=move |_| on_action.run(Action::Reset)>
                    "Reset"
                </button>
            </div>
        </section>
    }
}
