//! # rebuilder-domain
//!
//! Pure domain model for the Re-Builder control panel.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, nanosecond timestamps
//! - Define **Settings** (the five backend tuning knobs and their defaults)
//! - Define **Status snapshots** (what `/status` reports about a run)
//! - Define **Cube slots** (the eight positions of a build and their colours)
//! - Define **Actions** (commands the panel can send to the device)
//! - Define the **button table** (which action buttons a status enables)
//! - Turn snapshots into display-ready text (`display`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod buttons;
pub mod cube;
pub mod display;
pub mod settings;
pub mod status;
