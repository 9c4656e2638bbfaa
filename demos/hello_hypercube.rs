//! Hello Hypercube
//!
//! The simplest ndcube demo: build a tesseract bundle, spin it with a
//! composite of its basis rotations and print the rotated wireframe.
//!
//! This demo shows:
//! - Composing a bundle for a dimension and angle
//! - Combining basis rotations into one composite rotation
//! - Walking the edge list the way a line renderer would
//!
//! Run with: `cargo run --example hello_hypercube`

use ndcube_core::{compose, WireframeShape};

fn main() {
    env_logger::init();

    let bundle = compose(0.4, 4).expect("4 is a valid dimension");
    println!(
        "{}-cube: {} vertices, {} edges, {} basis rotations",
        bundle.dimension(),
        bundle.vertex_count(),
        bundle.edge_count(),
        bundle.rotation_matrices().len()
    );

    // Rotate in every other basis plane at once
    let selection: Vec<usize> = (0..bundle.rotation_matrices().len()).step_by(2).collect();
    let rotation = bundle
        .composite_rotation(&selection)
        .expect("selection is within the basis");
    let rotated = bundle.rotated_vertices(&rotation);

    for e in bundle.edges() {
        let (a, b) = e.indices();
        println!("{:>2} -> {:>2}: {:?} -> {:?}", a, b, fmt(&rotated[a]), fmt(&rotated[b]));
    }
}

fn fmt(v: &[f64]) -> Vec<String> {
    v.iter().map(|x| format!("{:+.3}", x)).collect()
}
