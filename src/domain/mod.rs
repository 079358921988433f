// Domain layer: lookup models and the ports the adapters plug into.

pub mod model;
pub mod ports;
