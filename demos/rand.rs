//! A simple test program that sweeps a random path.
//!
//! This builds a control path from a sequence of random points, sweeps
//! the Catmull-Rom curve across it, and outputs an SVG.

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use catmull::{domain, ControlPath};

fn main() {
    let mut rng = rand::thread_rng();
    const N: usize = 10;
    let pts = (0..N)
        .map(|_| {
            let x = Uniform::from(0.0..500.0).sample(&mut rng);
            let y = Uniform::from(0.0..500.0).sample(&mut rng);
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    let path = ControlPath::new(pts.clone());
    eprintln!("sweeping {} segments", domain(&path));
    let curve = catmull::render(&path).expect("path has enough nodes");
    println!(
        r##"<!DOCTYPE html>
    <html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"
    </html>"##,
        curve.to_svg()
    );
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}", r="3", fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>"#
    );
}
