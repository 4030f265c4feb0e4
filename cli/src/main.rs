//! CLI entrypoint for Debate Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use arena_application::ports::events::{EventSink, NoEvents};
use arena_application::RunDebateUseCase;
use arena_infrastructure::{DebateArchive, HttpParticipantGateway, SessionLoader};
use arena_presentation::{Cli, ConsoleFormatter, LiveReporter, OutputFormat};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Debate Arena");

    let request = SessionLoader::load(&cli.session)
        .with_context(|| format!("loading session file {}", cli.session.display()))?;

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|              Debate Arena - Judged LLM Debate              |");
        println!("+============================================================+");
        println!();
        println!("Topic: {}", request.topic);
        println!(
            "Debaters: {} (sides assigned by coin toss)",
            request
                .debaters
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(" vs ")
        );
        println!(
            "Judges: {}",
            request
                .judges
                .iter()
                .map(|j| j.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpParticipantGateway::new());
    let use_case = RunDebateUseCase::new(gateway);

    let reporter = LiveReporter::new();
    let sink: &dyn EventSink = if cli.quiet { &NoEvents } else { &reporter };

    let result = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            use_case.execute_with(request, sink, &mut rng).await?
        }
        None => use_case.execute_with_events(request, sink).await?,
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    if let Some(dir) = cli.save {
        let path = DebateArchive::new(dir).save(&result)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
