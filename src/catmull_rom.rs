//! Uniform Catmull-Rom evaluation over a control path.

use kurbo::{BezPath, Point};

use crate::control_path::ControlPath;
use crate::error::SplineError;

/// Parameter step used when sweeping the curve for display.
pub const SWEEP_STEP: f64 = 0.01;

/// The exclusive upper bound of the evaluable parameter range.
///
/// A segment starting at `floor(t)` reads the node before `floor(t) + 1`
/// and the two nodes after it, so the last evaluable parameter sits just
/// below `len - 3`. Returns 0.0 for paths too short to evaluate at all.
pub fn domain(path: &ControlPath) -> f64 {
    path.len().saturating_sub(3) as f64
}

/// Evaluate the curve at parameter `t`.
///
/// `floor(t)` selects the segment and the fractional part is the local
/// position within it; at integer parameters the curve passes exactly
/// through a control node. The four nodes read for a segment are
/// `floor(t) .. floor(t) + 4`, and none of them is wrapped or clamped:
/// a parameter outside `0.0..domain(path)` fails with
/// [`SplineError::OutOfRange`]. A path of fewer than four nodes fails
/// with [`SplineError::InvalidPathLength`].
pub fn eval(path: &ControlPath, t: f64) -> Result<Point, SplineError> {
    if path.len() < 4 {
        return Err(SplineError::InvalidPathLength { len: path.len() });
    }
    if t < 0.0 {
        // The virtual index the segment's first lookup would have read.
        return Err(SplineError::OutOfRange {
            index: t.floor() as isize,
            len: path.len(),
        });
    }
    let seg = t as usize;
    let p0 = path.node(seg)?;
    let p1 = path.node(seg + 1)?;
    let p2 = path.node(seg + 2)?;
    let p3 = path.node(seg + 3)?;
    Ok(eval_segment(p0, p1, p2, p3, t - seg as f64))
}

/// Evaluate a single segment at local parameter `t` in `0.0..1.0`.
fn eval_segment(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    // The cubic Hermite basis with the Catmull-Rom tangents and the 0.5
    // tension factored out of every weight.
    let q0 = -t3 + 2.0 * t2 - t;
    let q1 = 3.0 * t3 - 5.0 * t2 + 2.0;
    let q2 = -3.0 * t3 + 4.0 * t2 + t;
    let q3 = t3 - t2;

    let x = 0.5 * (p0.x * q0 + p1.x * q1 + p2.x * q2 + p3.x * q3);
    let y = 0.5 * (p0.y * q0 + p1.y * q1 + p2.y * q2 + p3.y * q3);
    Point::new(x, y)
}

/// Sweep the whole evaluable range of the path.
///
/// The returned iterator steps the parameter by [`SWEEP_STEP`] from 0.0
/// to just below `domain(path)`, yielding the curve point at each step.
/// It borrows the path, so a fresh sweep is made each frame and picks up
/// whatever edits happened since the last one.
pub fn sweep(path: &ControlPath) -> Result<Sweep<'_>, SplineError> {
    if path.len() < 4 {
        return Err(SplineError::InvalidPathLength { len: path.len() });
    }
    Ok(Sweep {
        path,
        step_ix: 0,
        end: domain(path),
    })
}

/// Lazily evaluated curve points; see [`sweep`].
pub struct Sweep<'a> {
    path: &'a ControlPath,
    step_ix: usize,
    end: f64,
}

impl<'a> Iterator for Sweep<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // The step counter, not an accumulator, drives the parameter;
        // repeated addition of 0.01 would drift.
        let t = self.step_ix as f64 * SWEEP_STEP;
        if t >= self.end {
            return None;
        }
        self.step_ix += 1;
        let seg = t as usize;
        let nodes = self.path.nodes();
        Some(eval_segment(
            nodes[seg],
            nodes[seg + 1],
            nodes[seg + 2],
            nodes[seg + 3],
            t - seg as f64,
        ))
    }
}

/// Flatten the swept curve into a polyline for drawing.
pub fn render(path: &ControlPath) -> Result<BezPath, SplineError> {
    let mut points = sweep(path)?;
    let mut bez = BezPath::new();
    if let Some(first) = points.next() {
        bez.move_to(first);
        for p in points {
            bez.line_to(p);
        }
    }
    Ok(bez)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collinear() -> ControlPath {
        ControlPath::new(vec![
            Point::new(100., 100.),
            Point::new(200., 100.),
            Point::new(300., 100.),
            Point::new(400., 100.),
        ])
    }

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn passes_through_nodes_at_integer_parameters() {
        let path = ControlPath::new(vec![
            Point::new(0., 0.),
            Point::new(100., 50.),
            Point::new(200., 0.),
            Point::new(300., 75.),
            Point::new(400., 25.),
            Point::new(500., 50.),
            Point::new(600., 0.),
        ]);
        for seg in 0..4 {
            let expected = path.node(seg + 1).unwrap();
            assert_near(eval(&path, seg as f64).unwrap(), expected);
        }
    }

    #[test]
    fn segment_start_is_second_node() {
        let path = collinear();
        assert_near(eval(&path, 0.0).unwrap(), Point::new(200., 100.));
    }

    #[test]
    fn collinear_nodes_interpolate_linearly() {
        let path = collinear();
        assert_near(eval(&path, 0.5).unwrap(), Point::new(250., 100.));
        for p in sweep(&path).unwrap() {
            assert!((p.y - 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sweep_covers_one_segment_for_four_nodes() {
        let path = collinear();
        assert_eq!(domain(&path), 1.0);
        assert_eq!(sweep(&path).unwrap().count(), 100);
    }

    #[test]
    fn sweep_covers_every_segment() {
        let pts = (0..6).map(|i| Point::new(i as f64 * 50.0, 0.0)).collect();
        let path = ControlPath::new(pts);
        assert_eq!(domain(&path), 3.0);
        assert_eq!(sweep(&path).unwrap().count(), 300);
    }

    #[test]
    fn short_path_is_invalid() {
        let path = ControlPath::new(vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(2., 0.),
        ]);
        assert_eq!(
            eval(&path, 0.0),
            Err(SplineError::InvalidPathLength { len: 3 })
        );
        assert!(sweep(&path).is_err());
    }

    #[test]
    fn parameter_past_domain_is_out_of_range() {
        let path = collinear();
        assert_eq!(
            eval(&path, 1.0),
            Err(SplineError::OutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn negative_parameter_is_out_of_range() {
        let path = collinear();
        assert_eq!(
            eval(&path, -0.5),
            Err(SplineError::OutOfRange { index: -1, len: 4 })
        );
    }

    #[test]
    fn render_is_a_polyline_over_the_sweep() {
        let path = collinear();
        let bez = render(&path).unwrap();
        assert_eq!(bez.elements().len(), 100);
        assert_eq!(
            bez.elements()[0],
            kurbo::PathEl::MoveTo(Point::new(200., 100.))
        );
    }
}
