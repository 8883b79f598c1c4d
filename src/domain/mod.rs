// Domain layer: models returned to callers and the ports the host plugs in.

pub mod model;
pub mod ports;
