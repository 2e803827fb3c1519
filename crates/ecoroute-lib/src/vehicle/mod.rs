//! Vehicle kinds, emission profiles, and the profile table.
//!
//! This module is organized into focused submodules:
//!
//! - [`kind`] - The supported vehicle kinds and lenient parsing
//! - [`profile`] - Per-kind fuel/CO₂ coefficients and built-in defaults
//! - [`catalog`] - The immutable lookup table, optionally overridden from CSV
//!
//! # Example
//!
//! ```
//! use ecoroute_lib::vehicle::{VehicleCatalog, VehicleKind};
//!
//! let catalog = VehicleCatalog::builtin();
//! let van = catalog.profile(VehicleKind::from_str_lossy("van"));
//! assert_eq!(van.weight_factor, 1.3);
//!
//! // Unknown kinds fall back to the car profile.
//! let fallback = catalog.profile(VehicleKind::from_str_lossy("hovercraft"));
//! assert_eq!(fallback, catalog.profile(VehicleKind::Car));
//! ```

pub mod catalog;
pub mod kind;
pub mod profile;

pub use catalog::VehicleCatalog;
pub use kind::VehicleKind;
pub use profile::VehicleProfile;
