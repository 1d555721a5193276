// Domain layer: core models and ports (interfaces). No runtime dependencies beyond serde/async-trait.

pub mod model;
pub mod ports;
