/// Wire3D Terminal Demo - Spinning Cube and Pyramid
///
/// Projects two hardcoded wireframe meshes through the perspective
/// pipeline and draws their edges in the terminal, 60 frames per second.
/// Press Q or ESC to quit.
use nalgebra::Vector3;
use std::io;
use wire3d_core::{Camera, Object3d, Scene};
use wire3d_terminal::TerminalApp;

/// 75 degree field of view, in radians
const FOV: f32 = 1.308997;

fn main() -> io::Result<()> {
    println!("Wire3D Terminal Renderer - Loading...");

    let mut scene = Scene::new(Camera::default());
    scene.add_object(Object3d::cube(2.0, Vector3::new(-2.0, 0.0, 8.0)));
    scene.add_object(Object3d::pyramid(2.0, Vector3::new(2.0, 0.0, 8.0)));

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene, FOV)?;
    app.run()?;

    println!("Thank you for using Wire3D!");
    Ok(())
}
