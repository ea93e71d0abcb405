//! Integration of per-sample series into per-mechanism energy totals.

// local
use crate::imports::*;
use crate::params::*;
use crate::powerflow::PowerTraces;
use crate::utils::*;

/// Energy consumed or recovered per mechanism over one drive cycle [Wh]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EnergyBreakdown {
    pub rolling_wh: f64,
    pub aero_wh: f64,
    pub accel_wh: f64,
    pub grade_wh: f64,
    /// loss between battery terminals and wheels
    pub trans_loss_wh: f64,
    /// recovered by regenerative braking; negative by convention
    pub regen_wh: f64,
    /// total mechanical energy at the wheels
    pub mech_wh: f64,
    /// battery draw required to deliver `mech_wh` through the transmission
    pub battery_required_wh: f64,
}

impl SerdeAPI for EnergyBreakdown {}

impl EnergyBreakdown {
    /// Integrate each mechanism's series over the fixed time step.
    pub fn from_traces(traces: &PowerTraces, dt_s: f64) -> Self {
        let rolling_wh = (&traces.rolling_w * dt_s).sum() / S_PER_HR;
        let aero_wh = (&traces.aero_w * dt_s).sum() / S_PER_HR;
        // positive steps draw from the battery; negative steps feed regen
        let accel_wh = traces.accel_j.iter().map(|&e| max(e, 0.0)).sum::<f64>() / S_PER_HR;
        let grade_wh = traces.grade_j.sum() / S_PER_HR;
        let regen_wh =
            -(traces.accel_j.iter().map(|&e| min(e, 0.0).abs()).sum::<f64>() * ETA_REGEN
                / S_PER_HR);
        let mech_wh = rolling_wh + aero_wh + accel_wh + grade_wh;
        let battery_required_wh = mech_wh / ETA_TRANS;
        let trans_loss_wh = battery_required_wh - mech_wh;
        Self {
            rolling_wh,
            aero_wh,
            accel_wh,
            grade_wh,
            trans_loss_wh,
            regen_wh,
            mech_wh,
            battery_required_wh,
        }
    }
}
