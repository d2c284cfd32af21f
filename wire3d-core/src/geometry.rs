/// Mesh object model: owned vertex and edge storage plus world placement
use nalgebra::Vector3;

use crate::transform::Orientation;

/// A wireframe mesh placed in the world
///
/// The object exclusively owns its vertex and edge buffers; dropping it
/// releases the storage exactly once. Edges are index pairs into the
/// vertex list.
#[derive(Debug, Clone)]
pub struct Object3d {
    pub vertices: Vec<Vector3<f32>>,
    pub edges: Vec<[usize; 2]>,
    pub position: Vector3<f32>,
    pub orientation: Orientation,
}

impl Object3d {
    /// Create an object from arbitrary vertex and edge lists.
    ///
    /// Every edge index must be less than the vertex count; this is a
    /// caller precondition, checked only in debug builds.
    pub fn new(
        vertices: Vec<Vector3<f32>>,
        edges: Vec<[usize; 2]>,
        position: Vector3<f32>,
    ) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|&[a, b]| a < vertices.len() && b < vertices.len()),
            "edge index out of range"
        );
        Self {
            vertices,
            edges,
            position,
            orientation: Orientation::zero(),
        }
    }

    /// Axis-aligned cube centered on the mesh origin
    pub fn cube(size: f32, position: Vector3<f32>) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Vector3::new(-half, -half, -half), // left bottom back
            Vector3::new(half, -half, -half),  // right bottom back
            Vector3::new(-half, -half, half),  // left bottom front
            Vector3::new(half, -half, half),   // right bottom front
            Vector3::new(-half, half, -half),  // left top back
            Vector3::new(half, half, -half),   // right top back
            Vector3::new(-half, half, half),   // left top front
            Vector3::new(half, half, half),    // right top front
        ];
        let edges = vec![
            [0, 1], [1, 2], [2, 3], [3, 0], // bottom face
            [4, 5], [5, 6], [6, 7], [4, 7], // top face
            [0, 4], [1, 5], [2, 6], [3, 7], // side lines
        ];
        Self::new(vertices, edges, position)
    }

    /// Square-based pyramid: four base corners and an apex
    pub fn pyramid(size: f32, position: Vector3<f32>) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Vector3::new(-half, -half, -half), // base back left
            Vector3::new(half, -half, -half),  // base back right
            Vector3::new(half, -half, half),   // base front right
            Vector3::new(-half, -half, half),  // base front left
            Vector3::new(0.0, half, 0.0),      // apex
        ];
        let edges = vec![
            [0, 1], [1, 2], [2, 3], [3, 0], // base
            [0, 4], [1, 4], [2, 4], [3, 4], // slant edges
        ];
        Self::new(vertices, edges, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_copies_data() {
        let vertices = vec![Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 1.0)];
        let edges = vec![[0, 1]];
        let obj = Object3d::new(vertices.clone(), edges.clone(), Vector3::new(0.0, 0.0, 5.0));

        assert_eq!(obj.vertices, vertices);
        assert_eq!(obj.edges, edges);
        assert_eq!(obj.position, Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(obj.orientation, Orientation::zero());
    }

    #[test]
    #[should_panic(expected = "edge index out of range")]
    fn test_out_of_range_edge_is_rejected_in_debug() {
        let vertices = vec![Vector3::zeros()];
        Object3d::new(vertices, vec![[0, 1]], Vector3::zeros());
    }

    #[test]
    fn test_cube_shape() {
        let cube = Object3d::cube(2.0, Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        assert_eq!(cube.vertices[0], Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(cube.vertices[7], Vector3::new(1.0, 1.0, 1.0));
        assert!(cube
            .edges
            .iter()
            .all(|&[a, b]| a < cube.vertices.len() && b < cube.vertices.len()));
    }

    #[test]
    fn test_pyramid_shape() {
        let pyramid = Object3d::pyramid(2.0, Vector3::zeros());
        assert_eq!(pyramid.vertices.len(), 5);
        assert_eq!(pyramid.edges.len(), 8);
        // Apex sits on the vertical axis.
        assert_eq!(pyramid.vertices[4], Vector3::new(0.0, 1.0, 0.0));
        // Every slant edge meets the apex.
        assert!(pyramid.edges[4..].iter().all(|&[_, b]| b == 4));
    }

    #[test]
    fn test_create_destroy_many() {
        // Each object owns its buffers outright, so a long create/drop
        // sequence must be memory-neutral.
        for _ in 0..10_000 {
            let obj = Object3d::cube(2.0, Vector3::new(0.0, 0.0, 5.0));
            drop(obj);
        }
    }
}
