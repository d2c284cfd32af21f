/// Wire3D Core Library - Projection pipeline and mesh object model
///
/// This library provides the stateless core of the wireframe renderer:
/// yaw/pitch basis-vector rotation, world transformation, perspective
/// projection, and the mesh renderer that turns edges into line-draw calls.

pub mod transform;
pub mod geometry;
pub mod projection;
pub mod render;

// Re-export commonly used types
pub use geometry::Object3d;
pub use transform::{Basis, Orientation};
pub use projection::{vertex_to_world, Camera, Screen};
pub use render::{render_mesh, LineDrawer, Scene};
