// Domain layer: request/response models and the ports the handler depends on.

pub mod model;
pub mod ports;
