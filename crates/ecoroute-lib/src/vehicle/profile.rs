//! Per-kind emission and fuel coefficients.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::kind::VehicleKind;

/// Emission and fuel coefficients for one vehicle kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    /// Kilograms of CO₂ emitted per kilometre.
    pub co2_per_km: f64,
    /// Litres of fuel burned per kilometre.
    pub fuel_l_per_km: f64,
    /// Multiplier applied to fuel and CO₂ estimates.
    pub weight_factor: f64,
    /// Electricity draw per kilometre. Carried for completeness only; no
    /// estimate reads it.
    #[serde(rename = "electricityKWhPerKm", skip_serializing_if = "Option::is_none")]
    pub electricity_kwh_per_km: Option<f64>,
}

impl VehicleProfile {
    /// Built-in coefficients for `kind`.
    pub const fn default_for(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car => Self::new(0.192, 0.08, 1.0),
            VehicleKind::Van => Self::new(0.280, 0.12, 1.3),
            VehicleKind::Bike => Self::new(0.0, 0.0, 0.05),
            VehicleKind::Ev => Self {
                electricity_kwh_per_km: Some(0.15),
                ..Self::new(0.0, 0.0, 0.9)
            },
        }
    }

    const fn new(co2_per_km: f64, fuel_l_per_km: f64, weight_factor: f64) -> Self {
        Self {
            co2_per_km,
            fuel_l_per_km,
            weight_factor,
            electricity_kwh_per_km: None,
        }
    }

    pub(crate) fn validate(&self, kind: VehicleKind) -> Result<()> {
        let non_negative = [
            (self.co2_per_km, "co2_per_km"),
            (self.fuel_l_per_km, "fuel_l_per_km"),
        ];
        for (value, field) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!("{field} for '{kind}' must be finite and non-negative"),
                });
            }
        }

        if !self.weight_factor.is_finite() || self.weight_factor <= 0.0 {
            return Err(Error::VehicleDataValidation {
                message: format!("weight_factor for '{kind}' must be a finite positive number"),
            });
        }

        if let Some(kwh) = self.electricity_kwh_per_km {
            if !kwh.is_finite() || kwh < 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!(
                        "electricity_kwh_per_km for '{kind}' must be finite and non-negative"
                    ),
                });
            }
        }

        Ok(())
    }
}
