//! Module containing the battery capacity model.

// local
use crate::imports::*;
use crate::params::*;

use validator::Validate;

/// Battery pack parameters and capacity derating.
///
/// Usable energy is nominal capacity reduced by the usable fraction, the
/// health factor, and an ambient-temperature efficiency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
pub struct Battery {
    /// nominal capacity [kWh]
    #[validate(range(min = 0.1))]
    pub capacity_kwh: f64,
    /// portion of nominal capacity available for propulsion [%]
    #[validate(range(min = 0.0, max = 100.0))]
    pub usable_fraction_pct: f64,
    /// degradation factor; 100 for a new pack [%]
    #[validate(range(min = 0.0, max = 100.0))]
    pub health_pct: f64,
    /// ambient temperature [C]
    pub ambient_temp_c: f64,
    /// nominal pack voltage [V]; informational
    #[serde(default)]
    pub nominal_voltage_v: f64,
    /// initial state of charge [%]; informational
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub soc_pct: f64,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            capacity_kwh: 7.5,
            usable_fraction_pct: 80.0,
            health_pct: 100.0,
            ambient_temp_c: 20.0,
            nominal_voltage_v: 72.0,
            soc_pct: 50.0,
        }
    }
}

impl SerdeAPI for Battery {
    fn init(&mut self) -> anyhow::Result<()> {
        self.validate()
            .map_err(|err| anyhow!("battery: {err}"))
    }
}

impl Battery {
    /// Ambient-temperature efficiency, a three-branch step function.
    /// 15 C and 30 C themselves map to 1.0.
    pub fn temp_efficiency(&self) -> f64 {
        if self.ambient_temp_c < 15.0 {
            0.90 // cold weather penalty
        } else if self.ambient_temp_c > 30.0 {
            0.95 // hot weather penalty
        } else {
            1.0
        }
    }

    /// nominal pack energy [Wh]
    pub fn nominal_wh(&self) -> f64 {
        self.capacity_kwh * WH_PER_KWH
    }

    /// pack energy available for propulsion after derating [Wh]
    pub fn usable_capacity_wh(&self) -> f64 {
        self.nominal_wh()
            * (self.usable_fraction_pct / 100.0)
            * (self.health_pct / 100.0)
            * self.temp_efficiency()
    }
}
