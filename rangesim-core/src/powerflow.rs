//! Per-sample force and power series for each road-load mechanism.

// local
use crate::cycle::DriveCycle;
use crate::imports::*;
use crate::params::PhysicalProperties;
use crate::utils::*;
use crate::vehicle::Vehicle;

/// Rolling resistance force [N]; independent of speed.
pub fn rolling_force_n(veh: &Vehicle, props: &PhysicalProperties) -> f64 {
    veh.veh_kg * props.a_grav_mps2 * veh.wheel_rr_coef
}

/// Per-sample rolling resistance power [W]
pub fn rolling_power_w(
    cyc: &DriveCycle,
    veh: &Vehicle,
    props: &PhysicalProperties,
) -> Array1<f64> {
    &cyc.mps * rolling_force_n(veh, props)
}

/// Per-sample aerodynamic drag power [W]
pub fn aero_power_w(cyc: &DriveCycle, veh: &Vehicle, props: &PhysicalProperties) -> Array1<f64> {
    cyc.mps.mapv(|v| {
        0.5 * props.air_density_kg_per_m3 * veh.drag_coef * veh.frontal_area_m2 * v.powf(3.0)
    })
}

/// Per-step change in kinetic energy [J].
///
/// Positive steps are the acceleration energy drawn from the battery;
/// negative steps are the deceleration pool available to regenerative
/// braking. The first sample contributes nothing since no pre-trace speed
/// is assumed.
pub fn accel_energy_j(cyc: &DriveCycle, veh: &Vehicle) -> Array1<f64> {
    let mut kes: Vec<f64> = Vec::with_capacity(cyc.len());
    kes.push(0.0);
    for i in 1..cyc.len() {
        kes.push(0.5 * veh.veh_kg * (cyc.mps[i].powf(2.0) - cyc.mps[i - 1].powf(2.0)));
    }
    Array1::from_vec(kes)
}

/// Per-step potential energy gain [J], clamped to non-negative.
///
/// The percent grade is applied as an angle in degrees.
pub fn grade_energy_j(cyc: &DriveCycle, veh: &Vehicle, props: &PhysicalProperties) -> Array1<f64> {
    let sin_theta = veh.grade_percent.to_radians().sin();
    cyc.mps
        .mapv(|v| max(veh.veh_kg * props.a_grav_mps2 * v * cyc.dt_s * sin_theta, 0.0))
}

/// Per-sample series for every road-load mechanism, retained in results so
/// callers can plot power over time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PowerTraces {
    /// rolling resistance power [W]
    pub rolling_w: Array1<f64>,
    /// aerodynamic drag power [W]
    pub aero_w: Array1<f64>,
    /// per-step kinetic energy change [J]
    pub accel_j: Array1<f64>,
    /// per-step potential energy gain [J]
    pub grade_j: Array1<f64>,
}

impl SerdeAPI for PowerTraces {}

impl PowerTraces {
    pub fn new(cyc: &DriveCycle, veh: &Vehicle, props: &PhysicalProperties) -> Self {
        Self {
            rolling_w: rolling_power_w(cyc, veh, props),
            aero_w: aero_power_w(cyc, veh, props),
            accel_j: accel_energy_j(cyc, veh),
            grade_j: grade_energy_j(cyc, veh, props),
        }
    }

    pub fn peak_rolling_w(&self) -> f64 {
        ndarrmax(&self.rolling_w)
    }

    pub fn peak_aero_w(&self) -> f64 {
        ndarrmax(&self.aero_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::DriveCycle;

    fn constant_cyc(v: f64, n: usize) -> DriveCycle {
        DriveCycle {
            mps: Array1::from_elem(n, v),
            dt_s: 1.0,
            name: String::from("const"),
        }
    }

    #[test]
    fn test_rolling_force() {
        let veh = Vehicle::mock_vehicle();
        let props = PhysicalProperties::default();
        // 800 kg * 9.81 m/s^2 * 0.02
        assert!((rolling_force_n(&veh, &props) - 156.96).abs() < 1e-9);
    }

    #[test]
    fn test_aero_power_at_constant_speed() {
        let veh = Vehicle::mock_vehicle();
        let props = PhysicalProperties::default();
        let cyc = constant_cyc(10.0, 5);
        let aero = aero_power_w(&cyc, &veh, &props);
        // F_aero = 0.5 * 1.225 * 0.3 * 2.0 * 100 = 36.75 N -> 367.5 W
        for p in aero.iter() {
            assert!((p - 367.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_accel_energy_signs() {
        let veh = Vehicle::mock_vehicle();
        let cyc = DriveCycle {
            mps: array![0.0, 10.0, 10.0, 5.0],
            dt_s: 1.0,
            name: String::from("steps"),
        };
        let ke = accel_energy_j(&cyc, &veh);
        assert_eq!(ke[0], 0.0);
        assert_eq!(ke[1], 0.5 * 800.0 * 100.0);
        assert_eq!(ke[2], 0.0);
        assert_eq!(ke[3], 0.5 * 800.0 * (25.0 - 100.0));
    }

    #[test]
    fn test_grade_energy_zero_on_flat() {
        let veh = Vehicle::mock_vehicle();
        let props = PhysicalProperties::default();
        let cyc = constant_cyc(10.0, 5);
        assert_eq!(grade_energy_j(&cyc, &veh, &props).sum(), 0.0);
    }

    #[test]
    fn test_grade_percent_applied_as_degrees() {
        let mut veh = Vehicle::mock_vehicle();
        veh.grade_percent = 5.0;
        let props = PhysicalProperties::default();
        let cyc = constant_cyc(10.0, 1);
        let pe = grade_energy_j(&cyc, &veh, &props);
        let expected = 800.0 * 9.81 * 10.0 * 1.0 * 5.0_f64.to_radians().sin();
        assert!((pe[0] - expected).abs() < 1e-9);
    }
}
