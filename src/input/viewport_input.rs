//! Pointer handling for the main viewport, independent of any windowing crate.
//!
//! Dragging is a two-state machine (`Idle` ↔ `Dragging`) that turns cursor
//! motion into pan deltas; the wheel is stateless and turns scroll direction
//! into a zoom about the cursor.

/// Zoom factor per wheel notch. Scrolling down multiplies the scale by it
/// (zoom out), scrolling up divides by it.
pub const WHEEL_ZOOM_STEP: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    Pan { dx: f64, dy: f64 },
    Zoom { factor: f64, pivot_x: f64, pivot_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportInput {
    state: DragState,
    cursor: Option<(f64, f64)>,
}

impl ViewportInput {
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn press(&mut self) {
        self.state = DragState::Dragging;
    }

    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// Records the new cursor position and, while dragging, emits the pan for
    /// the movement since the previous position.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<ViewportCommand> {
        let previous = self.cursor.replace((x, y));

        match (self.state, previous) {
            (DragState::Dragging, Some((last_x, last_y))) => self.motion(x - last_x, y - last_y),
            _ => None,
        }
    }

    /// Relative motion, for hosts that report deltas directly.
    pub fn motion(&self, dx: f64, dy: f64) -> Option<ViewportCommand> {
        if self.state != DragState::Dragging || (dx == 0.0 && dy == 0.0) {
            return None;
        }

        Some(ViewportCommand::Pan { dx, dy })
    }

    /// Cursor left the window: forget the position so re-entry does not jump.
    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }
}

/// Zoom request for a wheel event at `(x, y)`. `delta_y > 0` means scrolling
/// down, towards the user.
#[must_use]
pub fn wheel(delta_y: f64, x: f64, y: f64) -> ViewportCommand {
    let factor = if delta_y > 0.0 {
        WHEEL_ZOOM_STEP
    } else {
        1.0 / WHEEL_ZOOM_STEP
    };

    ViewportCommand::Zoom {
        factor,
        pivot_x: x,
        pivot_y: y,
    }
}
