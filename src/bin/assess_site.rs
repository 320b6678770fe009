//! Assess a site from a JSON input file and print the result as JSON.
//!
//! Usage: assess_site <input.json | -> [seed]
//!
//! The input file holds one `AssessmentInput` record ("-" reads stdin).
//! Passing a numeric seed makes the run reproducible; without one the engine
//! draws from system entropy.

use anyhow::{bail, Context, Result};
use rtrwh_assessor::{AssessmentEngine, AssessmentInput};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    generated_at: String,
    seed: Option<u64>,
    input: &'a AssessmentInput,
    result: rtrwh_assessor::AssessmentResult,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: {} <input.json | -> [seed]", args[0]);
    }

    let raw = if args[1] == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args[1])
            .with_context(|| format!("failed to read input file {}", args[1]))?
    };

    let input: AssessmentInput =
        serde_json::from_str(&raw).context("failed to parse assessment input")?;

    let seed = match args.get(2) {
        Some(arg) => Some(arg.parse::<u64>().context("seed must be a non-negative integer")?),
        None => None,
    };
    let mut engine = match seed {
        Some(seed) => AssessmentEngine::with_seed(seed),
        None => AssessmentEngine::new(),
    };

    let result = engine
        .assess(&input)
        .context("assessment rejected the supplied input")?;

    let envelope = ReportEnvelope {
        generated_at: chrono::Utc::now().to_rfc3339(),
        seed,
        input: &input,
        result,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
