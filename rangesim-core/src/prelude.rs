pub use crate::battery::Battery;
pub use crate::cost::{compare_costs, CostParams, CostResult};
pub use crate::cycle::{CycleElement, DriveCycle};
pub use crate::energy::EnergyBreakdown;
pub use crate::error::SimError;
pub use crate::params::PhysicalProperties;
pub use crate::powerflow::PowerTraces;
pub use crate::range::{estimate_range, RangeResult};
pub use crate::simdrive::{RangeSim, Scenario, SimResults};
pub use crate::traits::SerdeAPI;
pub use crate::vehicle::Vehicle;
