//! Hypercube viewer driver
//!
//! Wires the geometry engine to the outside world: layered configuration,
//! the animation clock and bundle export. The geometry itself lives in
//! `ndcube_math` and `ndcube_core`.

pub mod config;
pub mod export;
pub mod systems;
