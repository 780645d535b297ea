use anyhow::Result;
use clap::Parser;
use consul_version_fact::{FactKind, FactRegistry, FactRegistryBuilder, ProbeOptions, VersionFact};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Print host facts derived from installed tool versions.
#[derive(Parser, Debug)]
#[command(name = "consul-version-fact", version, about)]
struct Cli {
    /// Fact to resolve; all registered facts when omitted
    fact: Option<String>,

    /// Print facts as a JSON object
    #[arg(long)]
    json: bool,

    /// Timeout for each version command, in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Run this consul executable instead of searching PATH
    #[arg(long)]
    consul_path: Option<PathBuf>,

    /// Evaluate confinements against this kernel instead of the host's
    #[arg(long)]
    kernel: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("consul_version_fact=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn build_registry(cli: &Cli) -> FactRegistry {
    let options = ProbeOptions {
        timeout: Duration::from_millis(cli.timeout_ms),
        executable: cli.consul_path.clone(),
    };

    let mut builder = FactRegistryBuilder::new();
    if let Some(kernel) = &cli.kernel {
        builder.kernel(kernel.clone());
    }
    for kind in FactKind::all() {
        builder.add_provider(VersionFact::new(kind, options.clone()));
    }
    builder.build()
}

fn render(facts: &BTreeMap<String, Option<String>>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(facts)?);
    }

    let lines: Vec<String> = facts
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|value| format!("{} => {}", name, value)))
        .collect();
    Ok(lines.join("\n"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let registry = build_registry(&cli);
    tracing::debug!(kernel = registry.kernel(), facts = ?registry.names(), "registry ready");

    let facts = match &cli.fact {
        Some(name) => {
            let value = registry.resolve(name).await?;
            BTreeMap::from([(name.clone(), value)])
        }
        None => registry.resolve_all().await,
    };

    let rendered = render(&facts, cli.json)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}
