//! `ontouml2alloy` — Transforms an OntoUML model into an Alloy specification.
//!
//! Reads a model JSON document, runs one transformation and writes the
//! generated `.als` module to `--out` (or stdout).
//!
//! **Usage:**
//! ```
//! ontouml2alloy --model <model.json> [--out <main.als>] [--config <options.toml>]
//!               [--scope <n>] [--int-bitwidth <n>] [--worlds <n>]
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `ontouml2alloy=info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ontouml2alloy::{TransformOptions, Transformer};
use ontouml_model::serializer::json;

/// Transform an OntoUML model into an Alloy specification.
#[derive(Parser)]
#[command(
    name = "ontouml2alloy",
    about = "Transform an OntoUML model into an Alloy specification"
)]
struct Args {
    /// Model JSON document.
    #[arg(long)]
    model: PathBuf,

    /// Output `.als` file. Written to stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML file with run-command options (`scope`, `intBitwidth`, `worlds`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default scope of the run commands.
    #[arg(long)]
    scope: Option<u32>,

    /// Integer bitwidth of the run commands.
    #[arg(long)]
    int_bitwidth: Option<u32>,

    /// Number of worlds in the multiple-worlds run.
    #[arg(long)]
    worlds: Option<u32>,
}

impl Args {
    /// Options from the config file, then overridden by explicit flags.
    fn options(&self) -> Result<TransformOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => TransformOptions::default(),
        };
        if let Some(scope) = self.scope {
            options.scope = scope;
        }
        if let Some(int_bitwidth) = self.int_bitwidth {
            options.int_bitwidth = int_bitwidth;
        }
        if let Some(worlds) = self.worlds {
            options.worlds = worlds;
        }
        Ok(options)
    }
}

fn load_options(path: &Path) -> Result<TransformOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ontouml2alloy=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = args.options()?;

    let text = fs::read_to_string(&args.model)
        .with_context(|| format!("Failed to read model {}", args.model.display()))?;
    let model = json::from_json(&text)
        .with_context(|| format!("Failed to parse model {}", args.model.display()))?;

    tracing::info!(
        model = model.name.as_deref().unwrap_or("<unnamed>"),
        classes = model.classes.len(),
        relations = model.relations.len(),
        generalizations = model.generalizations.len(),
        "loaded model"
    );

    let generated = Transformer::with_options(&model, options)
        .run()
        .with_context(|| format!("Failed to transform {}", args.model.display()))?;

    match &args.out {
        Some(out) => {
            fs::write(out, &generated.source)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            let report = &generated.report;
            eprintln!(
                "Generated {} world fields, {} facts, {} functions, {} datatypes, {} enums",
                report.world_field_count,
                report.fact_count,
                report.fun_count,
                report.datatype_count,
                report.enum_count
            );
            eprintln!("  Written: {}", out.display());
        }
        None => print!("{}", generated.source),
    }
    Ok(())
}
