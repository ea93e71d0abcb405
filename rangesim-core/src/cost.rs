//! Operating cost comparison between the EV and a petrol baseline.

// local
use crate::imports::*;
use crate::params::*;
use crate::range::RangeResult;

use validator::Validate;

/// Auxiliary-load and pricing inputs for the cost comparison.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
pub struct CostParams {
    /// constant auxiliary power draw, e.g. HVAC [W]
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub aux_load_w: f64,
    /// electricity price [currency/kWh]
    #[validate(range(min = 0.0))]
    pub elec_price_per_kwh: f64,
    /// petrol consumption of the comparison vehicle [L/100km]
    #[validate(range(min = 0.1))]
    pub fuel_economy_l_per_100km: f64,
    /// petrol price [currency/L]
    #[validate(range(min = 0.0))]
    pub fuel_price_per_l: f64,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            aux_load_w: 1000.0,
            elec_price_per_kwh: 0.7,
            fuel_economy_l_per_100km: 8.0,
            fuel_price_per_l: 165.0,
        }
    }
}

impl SerdeAPI for CostParams {
    fn init(&mut self) -> anyhow::Result<()> {
        self.validate()
            .map_err(|err| anyhow!("cost params: {err}"))
    }
}

/// Per-km costs and projected savings for both load scenarios.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CostResult {
    pub ev_cost_per_km: f64,
    pub ev_cost_aux_per_km: f64,
    pub petrol_cost_per_km: f64,
    pub saving_per_km: f64,
    pub saving_aux_per_km: f64,
    /// savings over the full projected range
    pub total_saving: f64,
    pub total_saving_aux: f64,
}

impl SerdeAPI for CostResult {}

/// Convert consumption rates and the petrol baseline into per-km and
/// whole-range cost figures. Pure arithmetic; undefined upstream states
/// never reach this point.
pub fn compare_costs(range: &RangeResult, params: &CostParams) -> CostResult {
    let ev_cost_per_km = range.consumption_wh_per_km / WH_PER_KWH * params.elec_price_per_kwh;
    let ev_cost_aux_per_km =
        range.consumption_aux_wh_per_km / WH_PER_KWH * params.elec_price_per_kwh;
    let petrol_cost_per_km = params.fuel_economy_l_per_100km / 100.0 * params.fuel_price_per_l;
    let saving_per_km = petrol_cost_per_km - ev_cost_per_km;
    let saving_aux_per_km = petrol_cost_per_km - ev_cost_aux_per_km;
    CostResult {
        ev_cost_per_km,
        ev_cost_aux_per_km,
        petrol_cost_per_km,
        saving_per_km,
        saving_aux_per_km,
        total_saving: saving_per_km * range.range_km,
        total_saving_aux: saving_aux_per_km * range.range_aux_km,
    }
}
