use leptos::prelude::*;
use rebuilder_app::router::View;

#[component]
pub fn Nav(
    /// The visible view.
    active: ReadSignal<View>,
    /// Called with the view the user asked for.
    on_navigate: Callback<View>,
) -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li>
                    <button
                        id="btn-home"
                        class:active=move || active.get() == View::Home
                        on:click=move |_| on_navigate.run(View::Home)
                    >
                        "Home"
                    </button>
                </li>
                <li>
                    <button
                        id="btn-settings"
                        class:active=move || active.get() == View::Settings
                        on:click=move |_| on_navigate.run(View::Settings)
                    >
                        "Settings"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
