/// Example: Render a custom wireframe mesh
///
/// Builds a triangular prism through the mesh factory instead of using one
/// of the built-in shapes, then spins it in the terminal.
///
/// Usage: cargo run --example custom_mesh
use nalgebra::Vector3;
use std::io;
use wire3d_core::{Camera, Object3d, Scene};
use wire3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let vertices = vec![
        Vector3::new(-1.0, -1.0, -1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(0.0, 1.0, -1.0),
        Vector3::new(-1.0, -1.0, 1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(0.0, 1.0, 1.0),
    ];
    let edges = vec![
        [0, 1], [1, 2], [2, 0], // back triangle
        [3, 4], [4, 5], [5, 3], // front triangle
        [0, 3], [1, 4], [2, 5], // connecting edges
    ];
    let prism = Object3d::new(vertices, edges, Vector3::new(0.0, 0.0, 6.0));

    let mut scene = Scene::new(Camera::default());
    scene.add_object(prism);

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene, 1.308997)?;
    app.run()
}
