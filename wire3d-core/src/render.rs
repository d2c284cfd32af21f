/// Mesh renderer: projects vertices and emits one line-draw call per edge
use nalgebra::Vector2;

use crate::geometry::Object3d;
use crate::projection::{Camera, Screen};

/// Host-provided 2D line primitive, in pixel coordinates.
///
/// The draw is assumed to always succeed; the renderer never inspects a
/// result.
pub trait LineDrawer {
    fn draw_line(&mut self, a: Vector2<f32>, b: Vector2<f32>);
}

/// Project every vertex of `object`, then draw one line per edge.
///
/// Edges are drawn unconditionally in list order; there is no depth
/// sorting, occlusion, or clipping.
pub fn render_mesh<D: LineDrawer>(drawer: &mut D, object: &Object3d, screen: &Screen) {
    let projected: Vec<Vector2<f32>> = object
        .vertices
        .iter()
        .map(|v| screen.vertex_to_screen(v, &object.position, object.orientation))
        .collect();

    for &[a, b] in &object.edges {
        drawer.draw_line(projected[a], projected[b]);
    }
}

/// Per-frame render context: the camera and the objects to draw
///
/// Owned by the host loop and handed to the render step each frame,
/// replacing any global mesh or camera state.
#[derive(Debug, Default)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<Object3d>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: Object3d) {
        self.objects.push(object);
    }

    /// Render every object in insertion order.
    pub fn render<D: LineDrawer>(&self, drawer: &mut D, screen: &Screen) {
        for object in &self.objects {
            render_mesh(drawer, object, screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    struct RecordingDrawer {
        calls: Vec<(Vector2<f32>, Vector2<f32>)>,
    }

    impl RecordingDrawer {
        fn new() -> Self {
            Self { calls: Vec::new() }
        }
    }

    impl LineDrawer for RecordingDrawer {
        fn draw_line(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
            self.calls.push((a, b));
        }
    }

    fn screen() -> Screen {
        Screen::new(1024, 512, 1.308997)
    }

    #[test]
    fn test_one_draw_call_per_edge() {
        let cube = Object3d::cube(2.0, Vector3::new(0.0, 0.0, 5.0));
        let mut drawer = RecordingDrawer::new();

        render_mesh(&mut drawer, &cube, &screen());
        assert_eq!(drawer.calls.len(), cube.edges.len());
    }

    #[test]
    fn test_edges_connect_projected_vertices() {
        let screen = screen();
        let cube = Object3d::cube(2.0, Vector3::new(0.0, 0.0, 5.0));
        let mut drawer = RecordingDrawer::new();

        render_mesh(&mut drawer, &cube, &screen);

        for (call, &[a, b]) in drawer.calls.iter().zip(&cube.edges) {
            let expected_a =
                screen.vertex_to_screen(&cube.vertices[a], &cube.position, cube.orientation);
            let expected_b =
                screen.vertex_to_screen(&cube.vertices[b], &cube.position, cube.orientation);
            assert_eq!(call.0, expected_a);
            assert_eq!(call.1, expected_b);
        }
    }

    #[test]
    fn test_rotated_objects_render_through_their_orientation() {
        let screen = screen();
        let mut cube = Object3d::cube(2.0, Vector3::new(0.0, 0.0, 5.0));
        cube.orientation.rotate(0.4, -0.2);

        let mut drawer = RecordingDrawer::new();
        render_mesh(&mut drawer, &cube, &screen);

        let [a, _] = cube.edges[0];
        let expected =
            screen.vertex_to_screen(&cube.vertices[a], &cube.position, cube.orientation);
        assert_eq!(drawer.calls[0].0, expected);
    }

    #[test]
    fn test_scene_renders_objects_in_order() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(Object3d::cube(2.0, Vector3::new(-2.0, 0.0, 8.0)));
        scene.add_object(Object3d::pyramid(2.0, Vector3::new(2.0, 0.0, 8.0)));

        let mut drawer = RecordingDrawer::new();
        scene.render(&mut drawer, &screen());

        // 12 cube edges first, then 8 pyramid edges.
        assert_eq!(drawer.calls.len(), 20);
    }
}
