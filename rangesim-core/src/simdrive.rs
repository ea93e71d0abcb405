//! Simulation driver tying the pipeline stages together.

// local
use crate::battery::Battery;
use crate::cost::{compare_costs, CostParams, CostResult};
use crate::cycle::DriveCycle;
use crate::energy::EnergyBreakdown;
use crate::imports::*;
use crate::params::PhysicalProperties;
use crate::powerflow::PowerTraces;
use crate::range::{estimate_range, RangeResult};
use crate::utils::*;
use crate::vehicle::Vehicle;

use validator::Validate;

/// Vehicle, battery, and cost parameters as one loadable unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub veh: Vehicle,
    pub batt: Battery,
    pub cost: CostParams,
}

impl SerdeAPI for Scenario {
    fn init(&mut self) -> anyhow::Result<()> {
        self.veh.init()?;
        self.batt.init()?;
        self.cost.init()?;
        Ok(())
    }
}

/// Full result set for one simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimResults {
    pub energy: EnergyBreakdown,
    pub range: RangeResult,
    pub cost: CostResult,
    pub power: PowerTraces,
}

impl SerdeAPI for SimResults {}

/// One simulation run: a drive cycle plus the parameter set it is
/// evaluated against.
///
/// `compute` is a pure function of the held inputs; re-running it with the
/// same inputs yields bit-identical results, and nothing is cached between
/// runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RangeSim {
    pub cyc: DriveCycle,
    pub veh: Vehicle,
    pub batt: Battery,
    pub cost: CostParams,
    #[serde(default)]
    pub props: PhysicalProperties,
}

impl SerdeAPI for RangeSim {
    fn init(&mut self) -> anyhow::Result<()> {
        self.cyc.init()?;
        self.veh.init()?;
        self.batt.init()?;
        self.cost.init()?;
        Ok(())
    }
}

impl RangeSim {
    /// Validate the parts and assemble a run. Distinguishes an absent
    /// trace (`MissingInput`) from out-of-domain values
    /// (`InvalidParameter`).
    pub fn new(
        cyc: DriveCycle,
        mut veh: Vehicle,
        batt: Battery,
        cost: CostParams,
    ) -> Result<Self, SimError> {
        if cyc.is_empty() {
            return Err(SimError::MissingInput("speed trace has no samples".into()));
        }
        if !(cyc.dt_s > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "cycle time step must be positive, got {}",
                cyc.dt_s
            )));
        }
        if cyc.mps.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(SimError::InvalidParameter(
                "speed samples must be finite and non-negative".into(),
            ));
        }
        veh.set_derived()?;
        batt.validate()
            .map_err(|err| SimError::InvalidParameter(format!("battery: {err}")))?;
        cost.validate()
            .map_err(|err| SimError::InvalidParameter(format!("cost params: {err}")))?;
        Ok(Self {
            cyc,
            veh,
            batt,
            cost,
            props: PhysicalProperties::default(),
        })
    }

    pub fn from_scenario(cyc: DriveCycle, scenario: Scenario) -> Result<Self, SimError> {
        Self::new(cyc, scenario.veh, scenario.batt, scenario.cost)
    }

    /// Run the full pipeline: per-sample powers, energy totals, range, and
    /// cost comparison.
    pub fn compute(&self) -> Result<SimResults, SimError> {
        if ndarrallzeros(&self.cyc.mps) {
            log::warn!(
                "cycle `{}` is entirely stationary; range will be undefined",
                self.cyc.name
            );
        }
        let power = PowerTraces::new(&self.cyc, &self.veh, &self.props);
        let energy = EnergyBreakdown::from_traces(&power, self.cyc.dt_s);
        log::debug!(
            "cycle `{}`: mechanical {:.3} Wh, battery required {:.3} Wh",
            self.cyc.name,
            energy.mech_wh,
            energy.battery_required_wh
        );
        let range = estimate_range(&self.cyc, &energy, &self.batt, self.cost.aux_load_w)?;
        let cost = compare_costs(&range, &self.cost);
        Ok(SimResults {
            energy,
            range,
            cost,
            power,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_sim(mps: Vec<f64>) -> RangeSim {
        RangeSim::new(
            DriveCycle {
                mps: Array1::from_vec(mps),
                dt_s: 1.0,
                name: String::from("mock"),
            },
            Vehicle::mock_vehicle(),
            Battery::default(),
            CostParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_constant_speed_scenario() {
        let sim = mock_sim(vec![10.0; 5]);
        let res = sim.compute().unwrap();
        assert!(res.energy.rolling_wh.approx_eq(&2.18, 1e-6));
        assert!(res.energy.aero_wh.approx_eq(&0.510417, 1e-4));
        assert!((res.range.dist_km - 0.05).abs() < 1e-12);
        // no speed changes: nothing to accelerate, nothing to recover
        assert_eq!(res.energy.accel_wh, 0.0);
        assert_eq!(res.energy.regen_wh, 0.0);
        assert!(
            (res.energy.battery_required_wh - res.energy.mech_wh / crate::params::ETA_TRANS)
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let sim = mock_sim(vec![0.0, 3.0, 8.0, 12.0, 12.0, 6.0, 0.0]);
        let a = sim.compute().unwrap();
        let b = sim.compute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_zero_trace_is_degenerate_not_nan() {
        let sim = mock_sim(vec![0.0; 10]);
        match sim.compute() {
            Err(SimError::DegenerateTrace(_)) => {}
            other => panic!("expected DegenerateTrace, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_trace_is_missing_input() {
        let res = RangeSim::new(
            DriveCycle::default(),
            Vehicle::mock_vehicle(),
            Battery::default(),
            CostParams::default(),
        );
        match res {
            Err(SimError::MissingInput(_)) => {}
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn test_scenario_yaml_load_and_compute() {
        let yaml = "\
veh:
  scenario_name: Compact EV
  veh_kg: 800.0
  wheel_rr_coef: 0.02
  drag_coef: 0.3
  width_mm: 1500.0
  height_mm: 1600.0
  grade_percent: 0.0
batt:
  capacity_kwh: 7.5
  usable_fraction_pct: 80.0
  health_pct: 100.0
  ambient_temp_c: 20.0
  nominal_voltage_v: 72.0
  soc_pct: 50.0
cost:
  aux_load_w: 1000.0
  elec_price_per_kwh: 0.7
  fuel_economy_l_per_100km: 8.0
  fuel_price_per_l: 165.0
";
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert!((scenario.veh.frontal_area_m2 - 2.04).abs() < 1e-12);
        let sim = RangeSim::from_scenario(
            DriveCycle {
                mps: Array1::from_vec(vec![0.0, 5.0, 10.0, 10.0, 5.0, 0.0]),
                dt_s: 1.0,
                name: String::from("short"),
            },
            scenario,
        )
        .unwrap();
        let res = sim.compute().unwrap();
        assert!(res.range.range_km > 0.0);
        assert!(res.cost.saving_per_km > 0.0);
        assert_eq!(res.power.rolling_w.len(), 6);
    }

    #[test]
    fn test_results_serialize() {
        let sim = mock_sim(vec![0.0, 5.0, 10.0, 5.0, 0.0]);
        let res = sim.compute().unwrap();
        let json = res.to_json().unwrap();
        let de = SimResults::from_json(&json).unwrap();
        assert!(de.range.range_km.approx_eq(&res.range.range_km, 1e-12));
    }
}
