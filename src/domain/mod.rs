// Domain layer: value records and ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
