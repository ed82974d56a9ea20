// Domain layer: records, validation rules and ports. No HTTP or storage concerns.

pub mod model;
pub mod ports;
pub mod validation;
