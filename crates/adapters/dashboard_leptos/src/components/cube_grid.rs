//! Cube grid: one coloured indicator per build position.

use leptos::prelude::*;
use rebuilder_domain::cube::{self, CubeSlot, Level, SLOT_COUNT};

/// Slots 5–8 drawn above slots 1–4, the way the cubes are stacked.
#[component]
pub fn CubeGrid(
    /// Current colour of every slot.
    #[prop(into)]
    cubes: Signal<[CubeSlot; SLOT_COUNT]>,
    /// Whether every slot has been recognised.
    #[prop(into)]
    complete: Signal<bool>,
) -> impl IntoView {
    let layout = cubes.get_untracked();
    let indicator = move |slot: &CubeSlot| {
        let index = slot.position - 1;
        view! {
            <div id=slot.element_id() class=move || cubes.with(|slots| slots[index].class_name())>
                {slot.position.to_string()}
            </div>
        }
    };
    let row = move |level: Level| cube::on_level(&layout, level).map(indicator).collect_view();

    view! {
        <div class="cube-grid">
            <div class="cube-level upper">{row(Level::Upper)}</div>
            <div class="cube-level lower">{row(Level::Lower)}</div>
            <p class="cube-config-state">
                {move || if complete.get() { "Configuration complete" } else { "Recognising\u{2026}" }}
            </p>
        </div>
    }
}
