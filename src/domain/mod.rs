// Domain layer: loan models and the defaults port. No I/O here.

pub mod model;
pub mod ports;
