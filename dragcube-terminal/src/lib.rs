/// Terminal host for the draggable cube
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use dragcube_core::{viewport_aspect, Camera, CubeConfig, CubeModel, DragController, TransformTarget};
use std::io::{self, stdout, Write};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Page pixels covered by one terminal cell
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Width-to-height ratio of a terminal cell
const CELL_ASPECT: f64 = CELL_WIDTH_PX / CELL_HEIGHT_PX;

/// Main application struct for terminal cube rendering
pub struct TerminalApp {
    cube: CubeModel,
    controller: DragController,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(config: &CubeConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Self::with_size(config, width, height)
    }

    /// Build the app for a screen of `width` x `height` cells without
    /// touching the terminal
    pub fn with_size(config: &CubeConfig, width: u16, height: u16) -> io::Result<Self> {
        let cube = config
            .build_cube()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut app = Self {
            camera: framing_camera(&cube, width, height),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            controller: config.drag_controller(),
            cube,
            running: true,
        };
        app.rasterize();
        Ok(app)
    }

    pub fn cube(&self) -> &CubeModel {
        &self.cube
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn renderer(&self) -> &AsciiRenderer {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        execute!(stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.present()?;

        // Redraw only in response to input
        while self.running {
            if self.handle_event(event::read()?) {
                self.present()?;
            }
        }

        Ok(())
    }

    /// Apply one input event. Returns whether the screen needs redrawing.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.running = false;
                false
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.camera = framing_camera(&self.cube, width, height);
                self.renderer.resize(width as usize, height as usize);
                self.rasterize();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let x = mouse.column as f64 * CELL_WIDTH_PX;
        let y = mouse.row as f64 * CELL_HEIGHT_PX;

        match mouse.kind {
            MouseEventKind::Down(_) => {
                // any button, but only on the cube itself
                if self.renderer.covers(mouse.column as usize, mouse.row as usize) {
                    self.controller.pointer_down(x, y);
                }
                false
            }
            MouseEventKind::Up(_) => {
                self.controller.pointer_up();
                false
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                match self.controller.pointer_move(x, y, &mut self.cube) {
                    Some(clauses) => {
                        log::debug!("appended {} {}", clauses[0], clauses[1]);
                        self.rasterize();
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn rasterize(&mut self) {
        self.renderer.clear();
        self.renderer.render_cube(&self.cube, &self.camera);
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Status line
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "dragcube | drag the cube with the mouse | Q=Quit | transform clauses: {}",
                self.cube.transform().len()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        log::trace!("cube transform: {}", self.cube.transform_text());
        Ok(())
    }
}

fn framing_camera(cube: &CubeModel, width: u16, height: u16) -> Camera {
    Camera::framing(cube.half_edge(), viewport_aspect(width as u32, height as u32, CELL_ASPECT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> TerminalApp {
        TerminalApp::with_size(&CubeConfig::default(), 80, 40).unwrap()
    }

    #[test]
    fn test_drag_on_cube_rotates() {
        let mut app = app();

        assert!(!app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20)));
        assert!(app.controller().is_dragging());

        assert!(app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 42, 20)));
        // two cells right is 16px, 3.2 degrees about Y
        assert_eq!(app.cube().transform_text(), "rotateX(0deg) rotateY(3.2deg)");

        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.controller().is_dragging());
        assert!(!app.handle_event(mouse(MouseEventKind::Moved, 10, 10)));
        assert_eq!(app.cube().transform().len(), 2);
    }

    #[test]
    fn test_press_off_cube_is_ignored() {
        let mut app = app();

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!app.controller().is_dragging());
        assert!(!app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 5)));
        assert!(app.cube().transform().is_empty());
    }

    #[test]
    fn test_any_button_starts_drag() {
        let mut app = app();
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), 40, 20));
        assert!(app.controller().is_dragging());
        assert!(app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Right), 40, 21)));
        assert_eq!(app.cube().transform_text(), "rotateX(3.2deg) rotateY(0deg)");
    }

    #[test]
    fn test_square_terminal_is_draggable() {
        let mut app = TerminalApp::with_size(&CubeConfig::default(), 40, 40).unwrap();
        let covered = (0..40)
            .flat_map(|y| (0..40).map(move |x| (x, y)))
            .filter(|&(x, y)| app.renderer().covers(x, y))
            .count();
        assert!(covered > 0);
        assert!(app.renderer().covers(20, 20));

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 20));
        assert!(app.controller().is_dragging());
    }

    #[test]
    fn test_zero_width_terminal() {
        let mut app = TerminalApp::with_size(&CubeConfig::default(), 0, 40).unwrap();
        assert!(!app.renderer().covers(0, 0));

        let mut app_after_resize = self::app();
        assert!(app_after_resize.handle_event(Event::Resize(0, 40)));
        assert!(app_after_resize.handle_event(Event::Resize(0, 0)));
        assert!(app_after_resize.handle_event(Event::Resize(80, 40)));
        assert!(app_after_resize.renderer().covers(40, 20));

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!app.controller().is_dragging());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!app.is_running());
    }

    #[test]
    fn test_resize_rebuilds_buffers() {
        let mut app = app();
        assert!(app.handle_event(Event::Resize(120, 50)));
        assert_eq!(app.renderer().width(), 120);
        assert_eq!(app.renderer().height(), 50);
        assert!(app.renderer().covers(60, 25));
    }
}
