/// Terminal host for the wireframe renderer
///
/// Owns the drawable surface, the frame loop, and the per-frame scene
/// update; the projection math itself lives in wire3d-core.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Scene, Screen};

pub mod renderer;

pub use renderer::TextCanvas;

/// Per-frame spin applied to every object between frames
const YAW_STEP: f32 = 0.02;
const PITCH_STEP: f32 = 0.01;

/// Main application struct driving one update/render step per frame
pub struct TerminalApp {
    scene: Scene,
    screen: Screen,
    canvas: TextCanvas,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, fov: f32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            screen: Screen::new(width as u32, height as u32, fov),
            canvas: TextCanvas::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_nanos(1_000_000_000 / 60);

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing: sleep off the remainder of the frame budget
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Single logic step between frames: spin every object a little.
    fn update(&mut self) {
        for object in &mut self.scene.objects {
            object.orientation.rotate(YAW_STEP, PITCH_STEP);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.scene.render(&mut self.canvas, &self.screen);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!("wire3d | FPS: {:.1} | Q/ESC=Quit", self.fps)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
