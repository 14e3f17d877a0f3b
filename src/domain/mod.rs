// Domain layer: records mirroring the external JSON and the port the dashboard talks to.

pub mod model;
pub mod ports;
