//! Scene tessellation
//!
//! Produces GPU-ready triangle lists from a scene; window and surface setup
//! belong to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::scene_vertices;
pub use vertex::{Vertex, as_bytes};
