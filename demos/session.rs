//! A scripted edit session.
//!
//! This stands in for an interactive host: it seeds the default path,
//! replays a short sequence of input ticks against it, and outputs an
//! SVG of the resulting curve with the node markers, the selected one
//! highlighted.

use kurbo::Point;

use catmull::{EditSession, InputState};

fn main() {
    let mut session = EditSession::new();

    // Pick the second node and drag it upward for a while.
    session.apply(&InputState {
        select_next: true,
        ..Default::default()
    });
    for _ in 0..10 {
        session.apply(&InputState {
            nudge_up: true,
            ..Default::default()
        });
    }

    // Then place the third node with the pointer.
    session.apply(&InputState {
        select_next: true,
        ..Default::default()
    });
    session.apply(&InputState {
        pointer: Some(Point::new(300., 350.)),
        ..Default::default()
    });

    eprintln!(
        "selected node {} of {}",
        session.path.selected(),
        session.path.len()
    );

    let curve = session.curve().expect("the seeded path is evaluable");
    println!(
        r##"<!DOCTYPE html>
    <html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"
    </html>"##,
        curve.to_svg()
    );
    for (i, pt) in session.path.nodes().iter().enumerate() {
        let fill = if session.path.is_selected(i) {
            "red"
        } else {
            "blue"
        };
        println!(
            r#"      <circle cx="{}" cy="{}", r="3", fill="{}" />"#,
            pt.x, pt.y, fill
        )
    }
    println!(
        r#"    </svg>
    </body>"#
    );
}
