//! Interactive editing of a control path, one input tick at a time.

use kurbo::{BezPath, Point, Vec2};

use crate::catmull_rom;
use crate::control_path::ControlPath;
use crate::error::SplineError;

/// How far a held nudge direction moves the selected node per tick.
const NUDGE_DIST: f64 = 5.0;

/// A snapshot of the edit input for one tick.
///
/// The host polls whatever devices it has and fills this in; the
/// session never talks to a device itself. `select_previous` and
/// `select_next` are discrete events (pressed this tick), the nudge
/// flags are held state, and `pointer` is an absolute position when the
/// pointer is down. Directions follow screen coordinates, so `nudge_up`
/// moves toward smaller y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub select_previous: bool,
    pub select_next: bool,
    pub nudge_left: bool,
    pub nudge_right: bool,
    pub nudge_up: bool,
    pub nudge_down: bool,
    pub pointer: Option<Point>,
}

/// An editing session over a single control path.
///
/// The session owns the path for its whole lifetime; a host drives it by
/// calling [`apply`](EditSession::apply) once per tick and then drawing
/// [`curve`](EditSession::curve) and the node markers.
#[derive(Clone, Debug)]
pub struct EditSession {
    pub path: ControlPath,
}

impl EditSession {
    /// Create a session seeded with the default four-node path.
    pub fn new() -> EditSession {
        EditSession {
            path: ControlPath::new(vec![
                Point::new(100., 100.),
                Point::new(200., 100.),
                Point::new(300., 100.),
                Point::new(400., 100.),
            ]),
        }
    }

    /// Apply one tick's worth of input to the path.
    ///
    /// Selection changes land first, then the held nudges as a single
    /// accumulated offset, then the absolute pointer move, so a pointer
    /// position wins over nudges within the same tick.
    pub fn apply(&mut self, input: &InputState) {
        if input.select_previous {
            self.path.select_previous();
        }
        if input.select_next {
            self.path.select_next();
        }

        let mut delta = Vec2::ZERO;
        if input.nudge_left {
            delta.x -= NUDGE_DIST;
        }
        if input.nudge_right {
            delta.x += NUDGE_DIST;
        }
        if input.nudge_up {
            delta.y -= NUDGE_DIST;
        }
        if input.nudge_down {
            delta.y += NUDGE_DIST;
        }
        if delta != Vec2::ZERO {
            self.path.move_selected_by(delta);
        }

        if let Some(pos) = input.pointer {
            self.path.move_selected_to(pos);
        }
    }

    /// The current curve as a polyline, recomputed from the live path.
    pub fn curve(&self) -> Result<BezPath, SplineError> {
        catmull_rom::render(&self.path)
    }
}

impl Default for EditSession {
    fn default() -> EditSession {
        EditSession::new()
    }
}
