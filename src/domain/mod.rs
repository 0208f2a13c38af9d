// Domain layer: card models and the ports the services are written against.

pub mod model;
pub mod ports;
