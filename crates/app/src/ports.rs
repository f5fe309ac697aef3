//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The panel runs on a single-threaded event loop, so none of the ports
//! require `Send`.

pub mod panel_api;
pub mod ticker;

pub use panel_api::PanelApi;
pub use ticker::Ticker;
