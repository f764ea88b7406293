mod commands;
mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_rational::BigRational;
use planekit::api::{CheckKind, Exact, Robust};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::commands::SampleArgs;
use crate::input::{IntersectDoc, PartitionDoc};
use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planekit-cli")]
#[command(about = "Segment × triangle intersection and polygon partition validation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check that a partition document decomposes its polygon
    Validate {
        #[arg(long)]
        input: PathBuf,
        /// Property every sub-polygon must have: vacuous, convex, y-monotone
        #[arg(long, default_value_t = CheckKind::Vacuous)]
        check: CheckKind,
        /// Exact rational arithmetic instead of f64 with robust predicates
        #[arg(long)]
        exact: bool,
        /// Also write the verdict here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersect a segment with a triangle
    Intersect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        exact: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit a random convex polygon on a grid with its fan partition
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 1000.0)]
        scale: f64,
        /// Number of boundary edges to split with a Steiner point
        #[arg(long, default_value_t = 0)]
        steiner: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    let out = run(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run(action: Action) -> Result<Value> {
    match action {
        Action::Validate {
            input,
            check,
            exact,
            out,
        } => {
            let doc: PartitionDoc = read_doc(&input)?;
            let verdict = if exact {
                commands::validate(&Exact::<BigRational>::new(), &doc, check)?
            } else {
                commands::validate(&Robust, &doc, check)?
            };
            let params = json!({"command": "validate", "check": check.to_string(), "exact": exact});
            emit(verdict, out.as_deref(), Payload::new(params).with_input(&input))
        }
        Action::Intersect { input, exact, out } => {
            let doc: IntersectDoc = read_doc(&input)?;
            let result = if exact {
                commands::intersect(&Exact::<BigRational>::new(), &doc)?
            } else {
                commands::intersect(&Robust, &doc)?
            };
            let params = json!({"command": "intersect", "exact": exact});
            emit(result, out.as_deref(), Payload::new(params).with_input(&input))
        }
        Action::Sample {
            seed,
            index,
            vertices,
            scale,
            steiner,
            out,
        } => {
            let args = SampleArgs {
                seed,
                index,
                vertices,
                scale,
                steiner,
            };
            let doc = serde_json::to_value(commands::sample(&args)?)?;
            let params = json!({
                "command": "sample",
                "seed": seed,
                "index": index,
                "vertices": vertices,
                "scale": scale,
                "steiner": steiner
            });
            emit(doc, out.as_deref(), Payload::new(params))
        }
        Action::Report => Ok(json!({
            "tool": "planekit-cli",
            "version": planekit::VERSION,
            "code_rev": provenance::current_git_rev(),
        })),
    }
}

fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Writes `value` to `out` (plus sidecar) when given; returns it for stdout.
fn emit(value: Value, out: Option<&Path>, payload: Payload) -> Result<Value> {
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(out, serde_json::to_vec_pretty(&value)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let sidecar = write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    }
    Ok(value)
}
