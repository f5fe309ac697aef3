use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rebuilder_app::config::PanelConfig;
use rebuilder_app::generation::Ticket;
use rebuilder_app::router::{View, ViewRouter};
use rebuilder_app::services::action_service::ActionService;
use rebuilder_app::services::settings_service::SettingsService;
use rebuilder_app::services::status_service::StatusService;
use rebuilder_domain::action::Action;
use rebuilder_domain::display::HomeDisplay;
use rebuilder_domain::settings::Settings;

pub mod api;
mod components;
mod pages;
pub mod ticker;

use api::HttpPanelApi;
use components::Nav;
use pages::{Home, SettingsPage};
use ticker::IntervalTicker;

/// Panel configuration embedded at build time.
pub const PANEL_CONFIG: &str = include_str!("../panel.toml");

/// Use-case services, all sharing one HTTP client.
#[derive(Clone)]
struct Services {
    settings: SettingsService<HttpPanelApi>,
    status: StatusService<HttpPanelApi, Local>,
    actions: ActionService<HttpPanelApi>,
}

impl Services {
    fn new(api: &HttpPanelApi) -> Self {
        Self {
            settings: SettingsService::new(api.clone()),
            status: StatusService::new(api.clone(), Local),
            actions: ActionService::new(api.clone()),
        }
    }
}

/// Root application component.
///
/// Owns the view router: the home view polls `/status`, the settings view
/// loads `/settings` when entered. Home is shown, and polled, from mount.
#[component]
pub fn App(config: PanelConfig) -> impl IntoView {
    let services = StoredValue::new(Services::new(&HttpPanelApi::new(
        config.api.base_url.clone(),
    )));
    let router = StoredValue::new_local(ViewRouter::new(IntervalTicker, config.poll_interval()));
    let sliders = config.settings;

    let (active, set_active) = signal(View::Home);
    let display = RwSignal::new(HomeDisplay::default());
    let form = RwSignal::new(Settings::default());

    let poll_status = move |ticket: Ticket| {
        let status = services.get_value().status;
        spawn_local(async move {
            if let Some(next) = status.poll(&ticket).await {
                display.set(next);
            }
        });
    };

    let show_home = move || {
        router.update_value(|r| r.show_home(poll_status));
        set_active.set(View::Home);
    };

    let show_settings = move || {
        let Some(ticket) = router.try_update_value(|r| r.show_settings()) else {
            return;
        };
        set_active.set(View::Settings);
        let settings = services.get_value().settings;
        spawn_local(async move {
            if let Some(loaded) = settings.load(&ticket).await {
                form.set(loaded);
            }
        });
    };

    let on_navigate = Callback::new(move |target: View| match target {
        View::Home => show_home(),
        View::Settings => show_settings(),
    });

    let on_action = Callback::new(move |action: Action| {
        let actions = services.get_value().actions;
        spawn_local(async move {
            actions.trigger(action).await;
        });
    });

    let on_save = Callback::new(move |()| {
        let settings = services.get_value().settings;
        let submitted = form.get_untracked();
        spawn_local(async move {
            settings.save(submitted).await;
        });
    });

    show_home();

    view! {
        <Nav active=active on_navigate/>
        <main>
            {move || match active.get() {
                View::Home => view! { <Home display on_action/> }.into_any(),
                View::Settings => {
                    view! { <SettingsPage form sliders on_save on_action/> }.into_any()
                }
            }}
        </main>
    }
}
