/// Character canvas with integer line drawing for terminal output
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Vector2;
use std::io::Write;
use wire3d_core::LineDrawer;

const LINE_CHAR: char = '#';

/// Off-screen-safe character framebuffer the wireframe edges land on
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell contents at `(x, y)`, or `None` outside the canvas.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = ' ';
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = LINE_CHAR;
    }

    /// Bresenham line between two cells; parts outside the canvas are
    /// skipped. Endpoint coordinates must stay within canvas-scale range
    /// (the `LineDrawer` impl below clamps before calling).
    pub fn draw_segment(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::White))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.cells[y * self.width + x]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineDrawer for TextCanvas {
    fn draw_line(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
        // A degenerate projection (zero or negative depth) can hand us
        // non-finite pixel coordinates; those have no cell to land on.
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        // Tiny positive depths produce huge finite coordinates. Pull the
        // endpoints to just outside the canvas edge so the integer walk
        // stays short and in i32 range.
        let max_x = self.width as f32;
        let max_y = self.height as f32;
        self.draw_segment(
            a.x.round().clamp(-1.0, max_x) as i32,
            a.y.round().clamp(-1.0, max_y) as i32,
            b.x.round().clamp(-1.0, max_x) as i32,
            b.y.round().clamp(-1.0, max_y) as i32,
        );
    }
}
