//! Scene → artifact bytes, and the JSON shapes used in outputs and provenance.

use mandala::prelude::*;
use mandala::svg::to_svg;
use serde_json::{json, Value};

use crate::config::OutputFormat;

pub fn encode(scene: &Scene, viewport: &Viewport, format: OutputFormat) -> anyhow::Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Svg => to_svg(scene, viewport).into_bytes(),
        OutputFormat::Json => serde_json::to_vec_pretty(&scene_json(scene))?,
    })
}

pub fn scene_json(scene: &Scene) -> Value {
    let xy = |p: &Vec2<f64>| json!([p.x, p.y]);
    json!({
        "boundary": {
            "center": xy(&scene.boundary.center),
            "radius": scene.boundary.radius
        },
        "dot_radius": scene.dot_radius,
        "dots": scene.dots.iter().map(xy).collect::<Vec<_>>(),
        "chords": scene.chords.iter().map(|c| json!({
            "from": c.from,
            "to": c.to,
            "start": xy(&c.start),
            "end": xy(&c.end)
        })).collect::<Vec<_>>()
    })
}

/// Parameters as supplied plus what they resolved to.
pub fn params_json(params: &ConnectionParameters, viewport: &Viewport) -> Value {
    let supplied = match params {
        ConnectionParameters::Direct(d) => json!({
            "base": d.base,
            "multiplier": d.multiplier
        }),
        ConnectionParameters::Date(d) | ConnectionParameters::HashedDate(d) => json!({
            "day": d.day,
            "month": d.month,
            "age": d.age
        }),
    };
    let r = params.resolve();
    json!({
        "variant": params.variant_name(),
        "supplied": supplied,
        "resolved": {
            "point_count": r.point_count,
            "target": r.target,
            "draws_chords": r.draws_chords()
        },
        "viewport": viewport_json(viewport)
    })
}

pub fn viewport_json(viewport: &Viewport) -> Value {
    json!({
        "width": viewport.width,
        "height": viewport.height,
        "padding": [
            viewport.padding.left,
            viewport.padding.right,
            viewport.padding.top,
            viewport.padding.bottom
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_scene_shape() {
        let vp = Viewport::new(100.0, 100.0);
        let scene = Renderer::new(vp).render_params(&ConnectionParameters::Direct(DirectParams {
            base: 12,
            multiplier: -5,
        }));
        // Direct variant with a negative multiplier: dots only.
        let v = scene_json(&scene);
        assert_eq!(v["dots"].as_array().unwrap().len(), 12);
        assert!(v["chords"].as_array().unwrap().is_empty());
        assert_eq!(v["boundary"]["radius"], 40.0);
        assert_eq!(v["dots"][0][0], 10.0);
    }

    #[test]
    fn params_record_resolution() {
        let vp = Viewport::new(100.0, 100.0);
        let p = ConnectionParameters::HashedDate(DateParams {
            day: 2,
            month: 10,
            age: Some(37),
        });
        let v = params_json(&p, &vp);
        assert_eq!(v["variant"], "hashed_date");
        assert_eq!(v["supplied"]["age"], 37);
        assert_eq!(v["resolved"]["point_count"], 43);
        assert_eq!(v["resolved"]["target"], 20);
    }

    #[test]
    fn encode_svg_and_json() {
        let vp = Viewport::new(100.0, 100.0);
        let scene = Renderer::new(vp).render_params(&ConnectionParameters::default());
        let svg = encode(&scene, &vp, OutputFormat::Svg).unwrap();
        assert!(String::from_utf8(svg).unwrap().starts_with("<svg"));
        let js = encode(&scene, &vp, OutputFormat::Json).unwrap();
        let v: Value = serde_json::from_slice(&js).unwrap();
        assert_eq!(v["chords"].as_array().unwrap().len(), 10);
    }
}
