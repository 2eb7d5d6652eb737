// Domain layer: the value types and the Logger port everything else plugs into.

pub mod model;
pub mod ports;
