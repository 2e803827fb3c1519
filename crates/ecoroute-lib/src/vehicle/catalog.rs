//! Vehicle profile table.
//!
//! The built-in table is constructed once on first use and shared for the rest
//! of the process. A CSV file may override individual rows; kinds it does not
//! mention keep their built-in coefficients.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

use super::kind::VehicleKind;
use super::profile::VehicleProfile;

static BUILTIN: Lazy<VehicleCatalog> = Lazy::new(|| VehicleCatalog {
    profiles: VehicleKind::ALL
        .into_iter()
        .map(|kind| (kind, VehicleProfile::default_for(kind)))
        .collect(),
    source: None,
});

/// Immutable mapping from vehicle kind to its profile.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCatalog {
    profiles: BTreeMap<VehicleKind, VehicleProfile>,
    source: Option<PathBuf>,
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl VehicleCatalog {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static VehicleCatalog {
        &BUILTIN
    }

    /// Load overrides from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded vehicle profile overrides");
        Ok(catalog)
    }

    /// Load overrides from CSV data.
    ///
    /// Required columns are `kind`, `co2_per_km`, `fuel_l_per_km` and
    /// `weight_factor`; `electricity_kwh_per_km` is optional. Header matching
    /// ignores case and punctuation, so `co2PerKm` is accepted as well.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::VehicleDataValidation {
                message: format!("failed to read vehicle data headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("kind", &["kind", "vehicle", "vehicle_kind"]),
            ("co2_per_km", &["co2_per_km", "co2perkm", "co2_kg_per_km"]),
            (
                "fuel_l_per_km",
                &["fuel_l_per_km", "fuellperkm", "fuel_per_km", "fuel_litres_per_km"],
            ),
            ("weight_factor", &["weight_factor", "weightfactor", "weight"]),
            (
                "electricity_kwh_per_km",
                &["electricity_kwh_per_km", "electricitykwhperkm", "kwh_per_km"],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            let found = alts.iter().find_map(|alt| {
                let alt_n = normalize_header(alt);
                normalized_headers.iter().position(|h| *h == alt_n)
            });
            if let Some(i) = found {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = ["kind", "co2_per_km", "fuel_l_per_km", "weight_factor"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::VehicleDataValidation {
                message: format!(
                    "vehicle data missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut profiles = BUILTIN.profiles.clone();
        let mut seen = HashSet::new();

        // header is line 1
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::VehicleDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            };

            let raw_kind = get("kind").unwrap_or_default();
            let kind = VehicleKind::parse(&raw_kind)
                .ok_or(Error::UnknownVehicleKind { kind: raw_kind })?;
            if !seen.insert(kind) {
                return Err(Error::DuplicateVehicleKind {
                    kind: kind.to_string(),
                });
            }

            let number = |field: &str| -> Result<f64> {
                get(field)
                    .ok_or_else(|| Error::VehicleDataValidation {
                        message: format!("missing {field} for '{kind}' at row {row}"),
                    })?
                    .parse::<f64>()
                    .map_err(|e| Error::VehicleDataValidation {
                        message: format!("invalid {field} for '{kind}' at row {row}: {e}"),
                    })
            };

            let electricity_kwh_per_km = if get("electricity_kwh_per_km").is_some() {
                Some(number("electricity_kwh_per_km")?)
            } else {
                None
            };

            let profile = VehicleProfile {
                co2_per_km: number("co2_per_km")?,
                fuel_l_per_km: number("fuel_l_per_km")?,
                weight_factor: number("weight_factor")?,
                electricity_kwh_per_km,
            };
            profile.validate(kind)?;

            profiles.insert(kind, profile);
        }

        Ok(Self {
            profiles,
            source: None,
        })
    }

    /// Resolve the profile for `kind`. Never fails.
    pub fn profile(&self, kind: VehicleKind) -> &VehicleProfile {
        self.profiles
            .get(&kind)
            .or_else(|| self.profiles.get(&VehicleKind::Car))
            .unwrap_or(&BUILTIN_CAR)
    }

    /// Resolve a profile from a raw identifier, falling back to `car`.
    pub fn profile_for_name(&self, kind: &str) -> &VehicleProfile {
        self.profile(VehicleKind::from_str_lossy(kind))
    }

    /// All profiles in table order.
    pub fn entries(&self) -> impl Iterator<Item = (VehicleKind, &VehicleProfile)> {
        self.profiles.iter().map(|(kind, profile)| (*kind, profile))
    }

    /// Source path if the table was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

static BUILTIN_CAR: VehicleProfile = VehicleProfile::default_for(VehicleKind::Car);

fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
