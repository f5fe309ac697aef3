//! # rebuilder-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PanelApi`: the four HTTP calls against the Re-Builder backend
//!   - `Ticker`: a cancellable periodic timer
//! - Define **use-case services**:
//!   - `SettingsService`: load and save the settings form
//!   - `StatusService`: turn a status poll into a home display
//!   - `ActionService`: send device actions
//! - Own the **view router**: which view is active, the polling timer and
//!   the request generation that invalidates late responses
//! - Load and validate the panel configuration
//!
//! ## Dependency rule
//! Depends on `rebuilder-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod generation;
pub mod ports;
pub mod router;
pub mod services;
