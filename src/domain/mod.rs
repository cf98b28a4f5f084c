// Domain layer: models and ports shared by core, adapters and app.

pub mod model;
pub mod ports;
