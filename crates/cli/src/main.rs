use anyhow::Result;
use clap::{Parser, Subcommand};
use figures::prelude::*;
use serde_json::{json, Map, Value};
use std::io::{self, Write};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figures-cli")]
#[command(about = "Describe figures and check their sides and angles", version = figures::VERSION)]
struct Cmd {
    /// How triangle and quadrangle checks compose the root rule (side count == 0)
    #[arg(long, global = true, default_value_t = BaseRule::Require)]
    base_rule: BaseRule,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Print the reference figures with their verdicts (default)
    Report,
    /// Print the reference figures as JSON
    Json,
    /// Draw random figures and print their verdicts
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Emit JSON instead of text blocks
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let cmd = Cmd::parse();
    let cfg = CheckCfg::with_base_rule(cmd.base_rule);
    match cmd.action.unwrap_or(Action::Report) {
        Action::Report => report(cfg),
        Action::Json => print_json(&reference_figures(), cfg),
        Action::Sample { seed, count, json } => sample(seed, count, json, cfg),
    }
}

fn report(cfg: CheckCfg) -> Result<()> {
    tracing::info!(base_rule = %cfg.base_rule, "report");
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &reference_figures(), cfg)?;
    Ok(())
}

fn sample(seed: u64, count: usize, as_json: bool, cfg: CheckCfg) -> Result<()> {
    tracing::info!(seed, count, json = as_json, "sample");
    let figs: Vec<Figure> = FigureSampler::new(SampleCfg::default(), seed)?
        .take(count)
        .map(|s| s.figure)
        .collect();
    if as_json {
        print_json(&figs, cfg)
    } else {
        let stdout = io::stdout();
        write_report(&mut stdout.lock(), &figs, cfg)?;
        Ok(())
    }
}

fn print_json(figs: &[Figure], cfg: CheckCfg) -> Result<()> {
    let doc = json!({
        "version": figures::VERSION,
        "base_rule": cfg.base_rule.to_string(),
        "figures": figs.iter().map(|f| figure_json(f, cfg)).collect::<Vec<_>>(),
    });
    let mut out = io::stdout().lock();
    writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

fn fields_json(fields: &[Field]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|f| (f.name.to_string(), json!(f.value)))
        .collect();
    Value::Object(map)
}

fn figure_json(fig: &Figure, cfg: CheckCfg) -> Value {
    let d = describe(fig);
    let c = checks(fig);
    json!({
        "kind": fig.kind().id(),
        "label": d.label,
        "side_count": d.side_count,
        "sides": fields_json(&d.sides),
        "angles": fields_json(&d.angles),
        "checks": {
            "base": c.base,
            "angle_sum": c.angle_sum,
            "shape": c.shape
        },
        "valid": c.valid(cfg)
    })
}
