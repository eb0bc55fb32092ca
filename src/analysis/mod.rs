pub mod definition;
pub mod evaluate;
pub mod plane;

pub use definition::{AngleDefinition, AngleTable, Segment};
pub use evaluate::{evaluate, AngleReading, AngleReadings};
pub use plane::{resolve_planes, standard_planes, PlaneDefinition, ResolvedPlane};
