// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;
pub mod tolerance;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod interval;
    pub mod matrix;
    mod projection;
    pub mod point;
    pub mod vector3d;
    pub mod line;
}
