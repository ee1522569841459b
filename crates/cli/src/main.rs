use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use mandala::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;
mod render;

use config::{FileConfig, OutputFormat};
use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "mandala-cli")]
#[command(about = "Render modular-multiplication mandalas")]
struct Cmd {
    /// JSON config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events (point-set regenerations)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Viewport and output options shared by the render commands.
#[derive(Args, Clone, Debug)]
struct ViewArgs {
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Uniform padding on all four sides
    #[arg(long)]
    padding: Option<f64>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl ViewArgs {
    fn apply(&self, cfg: &mut FileConfig) {
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        if let Some(p) = self.padding {
            cfg.padding = p;
        }
        if let Some(f) = self.format {
            cfg.format = f;
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Point count and multiplier taken directly
    Direct {
        #[arg(long)]
        base: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        multiplier: Option<i32>,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Point count from age, target from day × month
    Date {
        #[arg(long)]
        day: Option<i32>,
        #[arg(long)]
        month: Option<i32>,
        #[arg(long, conflicts_with = "no_age")]
        age: Option<i32>,
        /// Treat the age as unset (midpoint point count)
        #[arg(long)]
        no_age: bool,
        /// Hash-remap the age into the cosmetic point-count range
        #[arg(long)]
        hashed: bool,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// One frame per multiplier in [from, to], as if dragging the slider
    Sweep {
        #[arg(long)]
        base: Option<i32>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i32,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        to: i32,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Print the hash-remapped value of an integer
    Hash {
        #[arg(long, allow_negative_numbers = true)]
        value: i32,
        #[arg(long, default_value_t = mandala::cfg::NUM_POINTS_MIN_VALUE, allow_negative_numbers = true)]
        min: i32,
        #[arg(long, default_value_t = mandala::cfg::NUM_POINTS_MAX_VALUE, allow_negative_numbers = true)]
        max: i32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let mut cfg = FileConfig::load_or_default(cmd.config.as_deref())?;
    match cmd.action {
        Action::Direct {
            base,
            multiplier,
            view,
            out,
        } => {
            view.apply(&mut cfg);
            let params = ConnectionParameters::Direct(DirectParams {
                base: base.unwrap_or(cfg.base),
                multiplier: multiplier.unwrap_or(cfg.multiplier),
            });
            render_one(&params, &cfg, &out, "direct")
        }
        Action::Date {
            day,
            month,
            age,
            no_age,
            hashed,
            view,
            out,
        } => {
            view.apply(&mut cfg);
            let date = DateParams {
                day: day.unwrap_or(cfg.day),
                month: month.unwrap_or(cfg.month),
                age: if no_age { None } else { age.or(cfg.age) },
            };
            let params = if hashed {
                ConnectionParameters::HashedDate(date)
            } else {
                ConnectionParameters::Date(date)
            };
            render_one(&params, &cfg, &out, "date")
        }
        Action::Sweep {
            base,
            from,
            to,
            view,
            out_dir,
        } => {
            view.apply(&mut cfg);
            sweep(base.unwrap_or(cfg.base), from, to, &cfg, &out_dir)
        }
        Action::Hash { value, min, max } => hash(value, min, max),
        Action::Report => report(&cfg),
    }
}

fn render_one(
    params: &ConnectionParameters,
    cfg: &FileConfig,
    out: &Path,
    command: &str,
) -> Result<()> {
    let viewport = cfg.viewport();
    let resolved = params.resolve();
    tracing::info!(
        variant = params.variant_name(),
        point_count = resolved.point_count,
        target = resolved.target,
        out = %out.display(),
        "render"
    );
    let mut renderer = Renderer::new(viewport);
    let scene = renderer.render(&resolved);
    write_artifact(out, &render::encode(&scene, &viewport, cfg.format)?)?;
    let prov = write_sidecar(
        out,
        Payload::new(command, render::params_json(params, &viewport)),
    )?;
    tracing::info!(
        dots = scene.dots.len(),
        chords = scene.chords.len(),
        provenance = %prov.display(),
        "written"
    );
    Ok(())
}

fn sweep(base: i32, from: i32, to: i32, cfg: &FileConfig, out_dir: &Path) -> Result<()> {
    if from > to {
        bail!("empty sweep: --from {from} is greater than --to {to}");
    }
    tracing::info!(base, from, to, out_dir = %out_dir.display(), "sweep");
    let viewport = cfg.viewport();
    let mut renderer = Renderer::new(viewport);
    let mut store = ParamStore::new(ConnectionParameters::Direct(DirectParams {
        base,
        multiplier: from,
    }));
    let mut frames = Vec::new();
    for multiplier in from..=to {
        store.set_multiplier(multiplier);
        let params = store.get();
        let scene = renderer.render_params(&params);
        let name = format!("frame_{multiplier:04}.{}", cfg.format.extension());
        write_artifact(
            &out_dir.join(&name),
            &render::encode(&scene, &viewport, cfg.format)?,
        )?;
        frames.push(json!({
            "file": name,
            "multiplier": multiplier,
            "chords": scene.chords.len()
        }));
    }
    tracing::info!(
        frames = frames.len(),
        regenerations = renderer.regenerations(),
        "sweep_done"
    );
    let index = out_dir.join("index.json");
    write_artifact(&index, &serde_json::to_vec_pretty(&frames)?)?;
    write_sidecar(
        &index,
        Payload::new(
            "sweep",
            json!({
                "base": base,
                "from": from,
                "to": to,
                "viewport": render::viewport_json(&viewport),
                "format": cfg.format.extension()
            }),
        ),
    )?;
    Ok(())
}

fn hash(value: i32, min: i32, max: i32) -> Result<()> {
    tracing::debug!(value, min, max, "hash");
    match hash_remap(value, min, max) {
        Some(h) => {
            println!("{h}");
            Ok(())
        }
        None => bail!("empty range: --max {max} must be greater than --min {min}"),
    }
}

fn report(cfg: &FileConfig) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_revision(),
        "version": mandala::VERSION,
        "config": cfg,
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cmd = Cmd::try_parse_from([
            "mandala-cli",
            "direct",
            "--multiplier",
            "-5",
            "--width",
            "320",
            "--format",
            "json",
            "--out",
            "m.json",
        ])
        .unwrap();
        let Action::Direct {
            base,
            multiplier,
            view,
            ..
        } = cmd.action
        else {
            panic!("expected direct");
        };
        assert_eq!(base, None);
        assert_eq!(multiplier, Some(-5));
        let mut cfg = FileConfig::default();
        view.apply(&mut cfg);
        assert_eq!(cfg.width, 320.0);
        assert_eq!(cfg.height, 1000.0);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn age_and_no_age_conflict() {
        let res = Cmd::try_parse_from([
            "mandala-cli", "date", "--age", "30", "--no-age", "--out", "x.svg",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn render_one_writes_artifact_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("direct.svg");
        let cfg = FileConfig {
            width: 200.0,
            height: 200.0,
            ..FileConfig::default()
        };
        let params = ConnectionParameters::Direct(DirectParams {
            base: 10,
            multiplier: 0,
        });
        render_one(&params, &cfg, &out, "direct").unwrap();
        let svg = fs::read_to_string(&out).unwrap();
        assert_eq!(svg.matches("<line").count(), 0);
        assert_eq!(svg.matches(r#"fill="red""#).count(), 10);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("direct.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["params"]["resolved"]["draws_chords"], false);
    }

    #[test]
    fn sweep_writes_one_frame_per_multiplier() {
        let dir = tempdir().unwrap();
        let cfg = FileConfig {
            format: OutputFormat::Json,
            ..FileConfig::default()
        };
        sweep(8, -1, 3, &cfg, dir.path()).unwrap();
        let index: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("index.json")).unwrap()).unwrap();
        let frames = index.as_array().unwrap();
        assert_eq!(frames.len(), 5);
        // Direct guard: no chords for -1 and 0.
        assert_eq!(frames[0]["chords"], 0);
        assert_eq!(frames[1]["chords"], 0);
        assert_eq!(frames[2]["chords"], 8);
        assert!(dir.path().join("frame_0003.json").exists());
        assert!(dir.path().join("index.provenance.json").exists());
    }

    #[test]
    fn reversed_sweep_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(sweep(8, 5, 1, &FileConfig::default(), dir.path()).is_err());
    }

    #[test]
    fn hash_rejects_empty_range() {
        assert!(hash(37, 20, 60).is_ok());
        assert!(hash(37, 60, 20).is_err());
    }
}
