//! EcoRoute CLI library.
//!
//! Terminal styling and output formatting shared by the `ecoroute-cli`
//! subcommands.

pub mod output;
pub mod terminal;
