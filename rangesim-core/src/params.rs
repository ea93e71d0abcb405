//! Module containing physical constants and drivetrain efficiencies.

use crate::imports::*;

/// Unit conversions that should NEVER change
pub const M_PER_KM: f64 = 1000.0;
pub const WH_PER_KWH: f64 = 1000.0;
pub const S_PER_HR: f64 = 3600.0;

/// Drivetrain efficiencies
pub const ETA_TRANS: f64 = 0.9;
/// Fraction of deceleration kinetic energy recovered by regenerative braking
pub const ETA_REGEN: f64 = 0.3;
/// Reserved for a fuller motor/battery efficiency chain; battery demand is
/// derated by transmission efficiency alone.
pub const ETA_MOTOR: f64 = 0.95;
pub const ETA_BATT: f64 = 0.9;

/// Struct containing ambient physical properties
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhysicalProperties {
    pub air_density_kg_per_m3: f64, // = 1.225, sea level air density at approximately 15C
    pub a_grav_mps2: f64,           // = 9.81
}

impl SerdeAPI for PhysicalProperties {}

impl Default for PhysicalProperties {
    fn default() -> Self {
        Self {
            air_density_kg_per_m3: 1.225,
            a_grav_mps2: 9.81,
        }
    }
}
