use leptos::prelude::*;
use rebuilder_app::config::PanelConfig;
use rebuilder_dashboard::{App, PANEL_CONFIG};
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = PanelConfig::from_toml_str(PANEL_CONFIG);
    let level = loaded
        .as_ref()
        .map_or(tracing::Level::INFO, PanelConfig::log_level);
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid panel.toml, using defaults");
        PanelConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
