//! A Catmull-Rom spline path for interactive 2D curve editing.
//!
//! The curve here is the classic uniform Catmull-Rom interpolating
//! spline: it passes through every control node, with the tangent at a
//! node determined by its neighbors. The crate pairs the evaluator with
//! an editable [`ControlPath`] and a per-tick [`EditSession`], so a host
//! application only has to snapshot its input state and draw what the
//! sweep produces.

mod catmull_rom;
mod control_path;
mod error;
mod session;

pub use catmull_rom::{domain, eval, render, sweep, Sweep, SWEEP_STEP};
pub use control_path::ControlPath;
pub use error::SplineError;
pub use session::{EditSession, InputState};
