// Domain layer: number list model, transformations and ports. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
