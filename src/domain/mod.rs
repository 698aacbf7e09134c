// Domain layer: wire models mirroring the tacos API. No dependencies beyond std/serde.

pub mod model;
