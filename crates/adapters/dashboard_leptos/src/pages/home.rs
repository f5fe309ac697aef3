//! Home view: live status of the current run.

use leptos::prelude::*;
use rebuilder_domain::action::Action;
use rebuilder_domain::display::HomeDisplay;

use crate::components::{CubeGrid, RunControls, StatCard};

fn text(display: RwSignal<HomeDisplay>, read: fn(&HomeDisplay) -> String) -> Signal<String> {
    Signal::derive(move || display.with(read))
}

#[component]
pub fn Home(
    /// Latest display, replaced wholesale on every successful poll.
    display: RwSignal<HomeDisplay>,
    on_action: Callback<Action>,
) -> impl IntoView {
    view! {
        <section id="home">
            <h1>"3D Re-Builder"</h1>
            <div class="stats">
                <StatCard label="Status" id="status" value=text(display, |d| d.status.clone())/>
                <StatCard label="Started" id="time-start" value=text(display, |d| d.start_time.clone())/>
                <StatCard
                    label="Recognition"
                    id="time-config"
                    value=text(display, |d| d.config_duration.clone())
                />
                <StatCard label="Total" id="time-end" value=text(display, |d| d.total_duration.clone())/>
                <StatCard label="Energy" id="energy" value=text(display, |d| d.energy.clone())/>
            </div>
            <div class="progress">
                <progress
                    id="progress-bar"
                    max=move || display.with(|d| d.progress_max.to_string())
                    value=move || display.with(|d| d.progress_value.to_string())
                ></progress>
                <span id="progress-text">{move || display.with(|d| d.progress.clone())}</span>
            </div>
            <CubeGrid
                cubes=Signal::derive(move || display.with(|d| d.cubes))
                complete=Signal::derive(move || display.with(|d| d.config_complete))
            />
            <RunControls buttons=Signal::derive(move || display.with(|d| d.buttons)) on_action/>
        </section>
    }
}
