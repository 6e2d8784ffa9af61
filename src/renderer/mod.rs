//! WebGPU rendering module
//!
//! Scenes emit `Shape` primitives; `shapes` tessellates them into a single
//! alpha-blended triangle list that `pipeline` uploads each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
