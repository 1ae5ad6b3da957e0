use anyhow::{Context, Result};
use clap::Parser;
use launchstats::{
    config::{Config, Locale},
    load::{self, Source},
    process,
    report::{self, table},
};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Space launch statistics from a mission CSV")]
struct Args {
    /// CSV path or http(s) URL
    #[arg(default_value = "mission_launches.csv")]
    source: String,
    /// YAML config file
    #[arg(short, long, env = "LAUNCHSTATS_CONFIG")]
    config: Option<PathBuf>,
    /// Write the full dashboard (all report series) as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Month/weekday locale, overrides the config (en_US, en_GB, fr_FR, de_DE, es_ES)
    #[arg(long)]
    locale: Option<Locale>,
    /// Also print every report as a table
    #[arg(long)]
    reports: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let mut config = match &args.config {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    info!(locale = %config.locale, "startup");

    // ─── 3) load ─────────────────────────────────────────────────────
    let source = Source::parse(&args.source);
    let text = match load::load_csv_text(&Client::new(), &source).await {
        Ok(text) => text,
        Err(err) => {
            error!("Error loading CSV from {}: {:#}", source, err);
            return Err(err);
        }
    };

    // ─── 4) process + report ─────────────────────────────────────────
    let dataset = process::process_csv(&text, &config);
    let dashboard = report::build_dashboard(&dataset, &config);

    println!("\n--- Launch Statistics ---");
    table::summary_table(&dashboard).printstd();
    if let Some(insights) = table::insights_table(&dashboard) {
        println!("\n--- Insights ---");
        insights.printstd();
    }
    if args.reports {
        for r in &dashboard.reports {
            println!("\n--- {} ---", r.title);
            table::report_table(r).printstd();
        }
    }

    if let Some(path) = &args.json {
        dashboard.write_json(path)?;
    }

    info!("all done");
    Ok(())
}
