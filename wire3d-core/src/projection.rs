/// Perspective projection from mesh space to screen pixels
use nalgebra::{Vector2, Vector3};

use crate::transform::{Basis, Orientation};

/// Camera placement.
///
/// Carried in the scene for completeness but not consulted by the
/// projection below: the projection always treats the world origin as the
/// eye point, looking down the positive z axis with a fixed field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub rotation: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -5.0),
            rotation: 0.9162979,
        }
    }
}

/// Output surface dimensions and field of view
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
}

/// Rotate a mesh-local vertex by yaw/pitch, then translate it into world
/// space.
pub fn vertex_to_world(
    vertex: &Vector3<f32>,
    position: &Vector3<f32>,
    orientation: Orientation,
) -> Vector3<f32> {
    Basis::from_yaw_pitch(orientation.yaw, orientation.pitch).apply(vertex) + position
}

impl Screen {
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self { width, height, fov }
    }

    /// Project a mesh-local vertex to pixel coordinates.
    ///
    /// Perspective divide by world-space depth, with the world origin
    /// landing at the screen center. There is no near-plane clipping: a
    /// vertex at depth zero projects to infinities and a vertex behind the
    /// eye plane comes out mirrored. Callers get the raw IEEE-754 result.
    pub fn vertex_to_screen(
        &self,
        vertex: &Vector3<f32>,
        position: &Vector3<f32>,
        orientation: Orientation,
    ) -> Vector2<f32> {
        let world = vertex_to_world(vertex, position, orientation);

        // World-space height visible at one unit of depth.
        let screen_height_world = 2.0 * (self.fov / 2.0).tan();
        let pixels_per_unit = self.height as f32 / screen_height_world / world.z;

        Vector2::new(
            world.x * pixels_per_unit + self.width as f32 / 2.0,
            world.y * pixels_per_unit + self.height as f32 / 2.0,
        )
    }
}
