//! Sweep a control path loaded from a JSON file.
//!
//! The file holds the serialized form of a [`ControlPath`]: an object
//! with a `nodes` array of points.

use catmull::ControlPath;

fn main() {
    let path = std::env::args().skip(1).next().expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let path: ControlPath = serde_json::from_str(&data).unwrap();
    let curve = catmull::render(&path).unwrap();
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"
    "##,
        curve.to_svg()
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
