// Domain layer: enum codes, package records and the label lookup port.

pub mod model;
pub mod ports;
