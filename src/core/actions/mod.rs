pub mod ports;
pub mod rasterize_membership;
pub mod sample_grid;
