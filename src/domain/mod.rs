// Domain layer: wire model and ports (interfaces). No external dependencies
// beyond serde and the trait machinery.

pub mod model;
pub mod ports;
