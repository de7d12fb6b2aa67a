// Domain layer: grade/semester models and ports (interfaces). No terminal or rng dependencies here.

pub mod model;
pub mod ports;
