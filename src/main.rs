//! hh-salaries - average advertised salary per region from the hh.ru API.

use anyhow::Result;
use clap::Parser;
use hh_salaries::commands::ReportCommand;
use hh_salaries::config::Config;
use hh_salaries::format::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hh-salaries",
    version,
    about = "Average salary per region for Java vacancies on hh.ru",
    long_about = "Walks every page of the hh.ru vacancy search for \"java\", keeps salaries quoted in RUR and prints regions ranked by average salary."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (defaults to the config file value, then table)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "HH_PROXY")]
    proxy: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("API request failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    // clap hands a blank HH_PROXY through as Some("")
    if let Some(proxy) = cli.proxy.filter(|p| !p.trim().is_empty()) {
        config.proxy = Some(proxy);
    }

    ReportCommand::new(config).execute().await
}
