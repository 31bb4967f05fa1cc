// Re-export glam for convenience
pub use glam::*;

// Luma math types
mod interval;
mod ray;
mod transform;

pub use interval::Interval;
pub use ray::{Ray, DEFAULT_T_MIN};
pub use transform::Mat4Ext;
