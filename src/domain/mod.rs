// Domain layer: records, groups and the report row, plus the ports the core depends on.

pub mod model;
pub mod ports;
