/// Pointer-drag rotation controller
use crate::transform::{TransformClause, TransformTarget};

/// Degrees of rotation per pixel of pointer travel
pub const DEFAULT_SENSITIVITY: f64 = 0.2;

/// Pointer tracking state for one cube
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_x: f64,
    pub last_y: f64,
}

/// Turns pointer press/move/release into rotation clauses appended to a
/// cube's transform. One controller per cube.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    sensitivity: f64,
}

impl DragController {
    pub fn new() -> Self {
        Self::with_sensitivity(DEFAULT_SENSITIVITY)
    }

    pub fn with_sensitivity(sensitivity: f64) -> Self {
        Self {
            state: DragState::default(),
            sensitivity,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Pointer pressed on the cube: start dragging from `(x, y)`
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.state = DragState {
            is_dragging: true,
            last_x: x,
            last_y: y,
        };
        log::trace!("drag start at ({}, {})", x, y);
    }

    /// Pointer released anywhere. The last position is kept.
    pub fn pointer_up(&mut self) {
        if self.state.is_dragging {
            log::trace!("drag end at ({}, {})", self.state.last_x, self.state.last_y);
        }
        self.state.is_dragging = false;
    }

    /// Pointer moved anywhere. While dragging, appends
    /// `rotateX(dy * s) rotateY(dx * s)` to `target` and returns the pair;
    /// otherwise does nothing.
    pub fn pointer_move<T>(&mut self, x: f64, y: f64, target: &mut T) -> Option<[TransformClause; 2]>
    where
        T: TransformTarget + ?Sized,
    {
        if !self.state.is_dragging {
            return None;
        }

        let dx = x - self.state.last_x;
        let dy = y - self.state.last_y;
        let clauses = [
            TransformClause::RotateX(dy * self.sensitivity),
            TransformClause::RotateY(dx * self.sensitivity),
        ];
        target.append_clauses(&clauses);

        self.state.last_x = x;
        self.state.last_y = y;

        Some(clauses)
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
