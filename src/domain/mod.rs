// Domain layer: credit model, categories and ports. No I/O here.

pub mod model;
pub mod ports;
