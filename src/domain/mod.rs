// Domain layer: farm records and the ports the computations are written against.

pub mod model;
pub mod ports;
