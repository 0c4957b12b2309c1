use crate::api;
use crate::config::ScrapeConfig;
use crate::services::store::MarkdownStore;
use crate::types::ApiResponse;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobscrape", version, about = "Extract a job posting from a URL (JSON only)")]
pub struct Cli {
    /// Job posting URL; `https://` is assumed when no scheme is given.
    url: String,

    /// Directory the Markdown file is written to.
    #[arg(long = "out-dir", default_value = "jobs")]
    out_dir: PathBuf,

    /// Print the record without writing a file.
    #[arg(long = "dry-run")]
    dry_run: bool,

    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Timeout for vendor APIs and page fetches.
    #[arg(long = "api-timeout-ms")]
    api_timeout_ms: Option<u64>,

    /// Timeout for the rendering proxy.
    #[arg(long = "render-timeout-ms")]
    render_timeout_ms: Option<u64>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<ScrapeConfig> {
        let mut cfg = ScrapeConfig::from_env()?;
        if let Some(ua) = &self.user_agent {
            cfg = cfg.with_user_agent(ua.clone());
        }
        if let Some(ms) = self.api_timeout_ms {
            cfg = cfg.with_api_timeout_ms(ms);
        }
        if let Some(ms) = self.render_timeout_ms {
            cfg = cfg.with_render_timeout_ms(ms);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn run() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            print_json(&ApiResponse::<()>::err(format!("{e:#}")));
            std::process::exit(1);
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<String> {
    let cfg = cli.config()?;
    let json = if cli.dry_run {
        let scraped = api::scrape_url_blocking(&cli.url, &cfg)?;
        serde_json::to_string_pretty(&ApiResponse::ok(scraped))?
    } else {
        let store = MarkdownStore::new(&cli.out_dir);
        let stored = crate::runtime::block_on(api::scrape_and_store(&cli.url, &cfg, &store))?;
        serde_json::to_string_pretty(&ApiResponse::ok(stored))?
    };
    Ok(json)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobscrape=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_json<T: serde::Serialize>(val: &T) {
    match serde_json::to_string_pretty(val) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to encode output: {e}"),
    }
}
