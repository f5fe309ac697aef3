mod home;
mod settings;

pub use home::Home;
pub use settings::SettingsPage;
