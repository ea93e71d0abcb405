//! Module containing vehicle struct and related functions.

// local
use crate::imports::*;

use validator::Validate;

/// Fraction of the width x height bounding box that counts as frontal area
pub const FRONTAL_AREA_RATIO: f64 = 0.85;
pub const MM2_PER_M2: f64 = 1e6;

/// Struct containing vehicle attributes
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
pub struct Vehicle {
    /// Vehicle name
    #[serde(alias = "name")]
    #[serde(default)]
    pub scenario_name: String,
    /// vehicle mass [kg]
    #[serde(alias = "mass_kg")]
    #[validate(range(min = 1.0))]
    pub veh_kg: f64,
    /// rolling resistance coefficient
    #[validate(range(min = 0.001))]
    pub wheel_rr_coef: f64,
    /// aerodynamic drag coefficient
    #[validate(range(min = 0.1))]
    pub drag_coef: f64,
    /// frontal area [m^2]; derived from body width and height when omitted
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub frontal_area_m2: f64,
    /// overall body length [mm]; informational
    #[serde(default)]
    pub length_mm: f64,
    /// overall body width [mm]
    #[serde(default)]
    pub width_mm: f64,
    /// overall body height [mm]
    #[serde(default)]
    pub height_mm: f64,
    /// constant road gradient [%]; applied as an angle in degrees
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub grade_percent: f64,
}

impl SerdeAPI for Vehicle {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(self.set_derived()?)
    }
}

impl Vehicle {
    /// Validates declared parameter domains and fills in derived fields.
    /// Frontal area comes from the bounding box when not given directly.
    pub fn set_derived(&mut self) -> Result<(), SimError> {
        self.validate()
            .map_err(|err| SimError::InvalidParameter(format!("vehicle: {err}")))?;
        if self.frontal_area_m2 == 0.0 && self.width_mm > 0.0 && self.height_mm > 0.0 {
            self.frontal_area_m2 = FRONTAL_AREA_RATIO * self.width_mm * self.height_mm / MM2_PER_M2;
        }
        if self.frontal_area_m2 <= 0.0 {
            return Err(SimError::MissingInput(
                "frontal area: provide `frontal_area_m2` or body `width_mm` and `height_mm`"
                    .into(),
            ));
        }
        Ok(())
    }

    pub fn mock_vehicle() -> Self {
        let mut veh = Self {
            scenario_name: String::from("Mock Compact EV"),
            veh_kg: 800.0,
            wheel_rr_coef: 0.02,
            drag_coef: 0.3,
            frontal_area_m2: 2.0,
            length_mm: 3200.0,
            width_mm: 1500.0,
            height_mm: 1600.0,
            grade_percent: 0.0,
        };
        veh.set_derived().unwrap();
        veh
    }
}
