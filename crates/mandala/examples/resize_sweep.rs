//! Resize probe: one parameter set rendered across several viewport sizes.
//!
//! Prints the boundary circle, dot radius and a pattern fingerprint per size.
//! The fingerprint (chord index pairs) must not change when only the
//! viewport does.

use mandala::prelude::*;

fn main() {
    let params = ConnectionParameters::Direct(DirectParams {
        base: 60,
        multiplier: 21,
    });
    let sizes = [
        (320.0, 480.0),
        (480.0, 320.0),
        (1080.0, 1920.0),
        (1920.0, 1080.0),
    ];
    let mut renderer = Renderer::new(Viewport::new(sizes[0].0, sizes[0].1));
    let mut reference: Option<Vec<(usize, usize)>> = None;
    for (w, h) in sizes {
        renderer.set_viewport(Viewport::new(w, h).with_padding(Padding::uniform(16.0)));
        let scene = renderer.render_params(&params);
        let pattern = scene.chord_indices();
        let same = *reference.get_or_insert_with(|| pattern.clone()) == pattern;
        println!(
            "size={w}x{h} center=({:.1},{:.1}) radius={:.2} dot_radius={:.2} dots={} chords={} same_pattern={same}",
            scene.boundary.center.x,
            scene.boundary.center.y,
            scene.boundary.radius,
            scene.dot_radius,
            scene.dots.len(),
            scene.chords.len(),
        );
    }
    println!("regenerations={}", renderer.regenerations());
}
