//! Vehicle kind identifiers and their lenient parsing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Supported vehicle kinds.
///
/// Parsing is lenient: anything that is not a known identifier resolves to
/// [`VehicleKind::Car`], so a lookup never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[default]
    Car,
    Van,
    Bike,
    Ev,
}

impl VehicleKind {
    /// All kinds in table order.
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Car,
        VehicleKind::Van,
        VehicleKind::Bike,
        VehicleKind::Ev,
    ];

    /// Strict parse of a vehicle identifier (case-insensitive, surrounding
    /// whitespace ignored). Returns `None` for unknown identifiers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "car" => Some(VehicleKind::Car),
            "van" => Some(VehicleKind::Van),
            "bike" => Some(VehicleKind::Bike),
            "ev" => Some(VehicleKind::Ev),
            _ => None,
        }
    }

    /// Lenient parse used at the lookup boundary: unknown or empty values
    /// resolve to [`VehicleKind::Car`].
    pub fn from_str_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Lowercase identifier for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Van => "van",
            VehicleKind::Bike => "bike",
            VehicleKind::Ev => "ev",
        }
    }
}

impl<'de> Deserialize<'de> for VehicleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&value))
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
