/// ASCII rasterizer for the cube faces
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use dragcube_core::{css_to_world, Camera, CubeModel};
use nalgebra::{Matrix4, Point3, Vector3};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Faces turned further away than this are not drawn
const BACKFACE_THRESHOLD: f64 = 1e-6;

/// ASCII renderer that rasterizes the cube's six panels into terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f64>,
    char_buffer: Vec<char>,
    label_buffer: Vec<Option<char>>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f64::INFINITY; size],
            char_buffer: vec![' '; size],
            label_buffer: vec![None; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f64::INFINITY);
        self.char_buffer.fill(' ');
        self.label_buffer.fill(None);
    }

    /// Whether the cell at `(x, y)` shows part of the cube
    pub fn covers(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.depth_buffer[y * self.width + x].is_finite()
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y * self.width + x;
        Some(self.label_buffer[idx].unwrap_or(self.char_buffer[idx]))
    }

    pub fn render_cube(&mut self, cube: &CubeModel, camera: &Camera) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let model = css_to_world() * cube.transform().to_matrix();
        let light_dir = Vector3::new(0.0, 0.0, 1.0);

        for face in cube.faces() {
            let normal = model.transform_vector(&face.normal()).normalize();
            let brightness = normal.dot(&light_dir);
            if brightness <= BACKFACE_THRESHOLD {
                continue;
            }

            let Some(corners) = self.project_corners(&face.corners(cube.half_edge()), &model, camera) else {
                continue;
            };

            // never fall to the blank end of the ramp for a visible face
            let char_index = 1 + (brightness * (LUMINOSITY_RAMP.len() - 2) as f64) as usize;
            let character = LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)];

            self.rasterize_triangle(&[corners[0], corners[1], corners[2]], character);
            self.rasterize_triangle(&[corners[0], corners[2], corners[3]], character);

            if let Some((x, y, _)) =
                camera.project_to_screen(&face.center(), &model, self.width as u32, self.height as u32)
            {
                self.place_label(face.label(), x, y);
            }
        }
    }

    fn project_corners(
        &self,
        corners: &[Point3<f64>; 4],
        model: &Matrix4<f64>,
        camera: &Camera,
    ) -> Option<[(f64, f64, f64); 4]> {
        let mut screen = [(0.0, 0.0, 0.0); 4];
        for (slot, corner) in screen.iter_mut().zip(corners) {
            *slot = camera.project_to_screen(corner, model, self.width as u32, self.height as u32)?;
        }
        Some(screen)
    }

    fn place_label(&mut self, label: &str, x: f64, y: f64) {
        let row = y.round() as usize;
        if row >= self.height {
            return;
        }
        let len = label.chars().count();
        let start = (x.round() as usize).saturating_sub(len / 2);
        for (offset, c) in label.chars().enumerate() {
            let col = start + offset;
            if col < self.width {
                self.label_buffer[row * self.width + col] = Some(c);
            }
        }
    }

    fn rasterize_triangle(&mut self, coords: &[(f64, f64, f64); 3], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;

                let Some((w0, w1, w2)) = barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py)) else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;

                if let Some(label) = self.label_buffer[idx] {
                    writer.queue(SetForegroundColor(Color::Yellow))?;
                    writer.queue(Print(label))?;
                    continue;
                }

                let c = self.char_buffer[idx];
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Barycentric coordinates of `p` in a 2D triangle, `None` when degenerate
fn barycentric(v0: (f64, f64), v1: (f64, f64), v2: (f64, f64), p: (f64, f64)) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
