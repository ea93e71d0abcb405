//! Range estimation from battery energy demand and trace distance.

// local
use crate::battery::Battery;
use crate::cycle::DriveCycle;
use crate::energy::EnergyBreakdown;
use crate::imports::*;
use crate::params::*;
use crate::utils::*;

/// Consumption rates and projected ranges for one cycle, with and without
/// the constant auxiliary load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RangeResult {
    pub dist_km: f64,
    /// battery energy per km, baseline [Wh/km]
    pub consumption_wh_per_km: f64,
    /// battery energy per km with the auxiliary draw [Wh/km]
    pub consumption_aux_wh_per_km: f64,
    pub range_km: f64,
    pub range_aux_km: f64,
    pub usable_capacity_wh: f64,
    /// fraction of nominal pack energy this cycle draws, capped at 1.0
    pub battery_usage_frac: f64,
}

impl SerdeAPI for RangeResult {}

/// Derive consumption and range figures.
///
/// A trace with zero distance, or one that draws no battery energy, has no
/// defined consumption or range; both cases return
/// [`SimError::DegenerateTrace`] rather than letting `inf`/`NaN` escape.
pub fn estimate_range(
    cyc: &DriveCycle,
    energy: &EnergyBreakdown,
    batt: &Battery,
    aux_load_w: f64,
) -> Result<RangeResult, SimError> {
    let dist_km = cyc.dist_m().sum() / M_PER_KM;
    if dist_km <= 0.0 {
        return Err(SimError::DegenerateTrace(
            "cycle covers zero distance; consumption and range are undefined".into(),
        ));
    }
    let consumption_wh_per_km = energy.battery_required_wh / dist_km;
    if consumption_wh_per_km <= 0.0 {
        return Err(SimError::DegenerateTrace(
            "cycle draws no battery energy; range is undefined".into(),
        ));
    }
    let aux_wh = aux_load_w * cyc.duration_s() / S_PER_HR;
    let consumption_aux_wh_per_km = (energy.battery_required_wh + aux_wh) / dist_km;
    let usable_capacity_wh = batt.usable_capacity_wh();
    Ok(RangeResult {
        dist_km,
        consumption_wh_per_km,
        consumption_aux_wh_per_km,
        range_km: usable_capacity_wh / consumption_wh_per_km,
        range_aux_km: usable_capacity_wh / consumption_aux_wh_per_km,
        usable_capacity_wh,
        battery_usage_frac: min(energy.battery_required_wh / batt.nominal_wh(), 1.0),
    })
}
