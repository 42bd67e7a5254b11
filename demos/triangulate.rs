// Triangulates a star-shaped polygon with a square hole cut out of its
// middle and writes the resulting triangle mesh to an SVG file.

use clipper2_rust::core::{FillRule, Path64, Paths64, Point64};
use clipper2_rust::utils::svg::{svg_add_solution_64, svg_add_subject_64, SvgWriter};
use clipper2_rust::{triangulate, TriangulateResult};

fn star(cx: i64, cy: i64, outer: i64, inner: i64, points: usize) -> Path64 {
    let mut path = Vec::with_capacity(points * 2);
    for i in 0..points * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = std::f64::consts::PI * i as f64 / points as f64;
        let x = cx + (r as f64 * angle.cos()) as i64;
        let y = cy + (r as f64 * angle.sin()) as i64;
        path.push(Point64::new(x, y));
    }
    path
}

fn square(cx: i64, cy: i64, half: i64) -> Path64 {
    vec![
        Point64::new(cx - half, cy - half),
        Point64::new(cx + half, cy - half),
        Point64::new(cx + half, cy + half),
        Point64::new(cx - half, cy + half),
    ]
}

fn main() {
    let outer = star(300, 300, 250, 120, 7);
    let hole = square(300, 300, 40);

    let subject: Paths64 = vec![outer, hole];

    let (result, triangles) = triangulate(&subject, true);
    match result {
        TriangulateResult::Success => {
            println!(
                "Triangulate: {} input paths -> {} triangles",
                subject.len(),
                triangles.len()
            );
        }
        other => {
            println!("Triangulate failed: {:?}", other);
            return;
        }
    }

    let mut svg = SvgWriter::new(2);
    svg_add_subject_64(&mut svg, &subject, FillRule::NonZero);
    svg_add_solution_64(&mut svg, &triangles, FillRule::NonZero, true);
    svg.save_to_file("triangulate.svg", 600, 600, 20);
    println!("Saved triangulate.svg");
}
