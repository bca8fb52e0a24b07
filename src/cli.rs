use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::fetch::GitHubClient;
use crate::logging::{self, LogTarget};
use crate::metrics::DEFAULT_TOP_AUTHORS;
use crate::report::OutputFormat;
use crate::tui::DashboardState;

#[derive(Parser)]
#[command(name = "ghpulse")]
#[command(about = "GitHub commit activity dashboard: weekly trend, top contributors, bus factor")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub API token (raises the rate limit)")]
    pub token: Option<String>,

    #[arg(long, global = true, env = "GHPULSE_API_URL", help = "GitHub API base URL")]
    pub api_url: Option<String>,

    #[arg(long, global = true, value_parser = humantime::parse_duration, help = "Request timeout (e.g. 10s, 1m)")]
    pub timeout: Option<Duration>,

    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=100), help = "Commits to request (max 100)")]
    pub per_page: Option<u8>,

    #[arg(long, global = true, env = "GHPULSE_LOG", default_value = "warn", help = "Log filter (e.g. debug, ghpulse=trace)")]
    pub log_level: String,

    #[arg(long, global = true, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    pub fn config(&self) -> Config {
        Config::new(
            self.token.clone(),
            self.api_url.clone(),
            self.timeout,
            self.per_page,
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal dashboard (default)
    Dashboard {
        #[arg(long, help = "Initial repository owner")]
        owner: Option<String>,

        #[arg(long, help = "Initial repository name")]
        repo: Option<String>,

        #[arg(long, default_value_t = DEFAULT_TOP_AUTHORS, help = "Contributors shown in the bar chart")]
        top: usize,

        #[arg(long, help = "Load immediately on start")]
        load: bool,
    },
    /// Print metrics for one repository and exit
    Report {
        #[arg(help = "Repository owner")]
        owner: String,

        #[arg(help = "Repository name")]
        repo: String,

        #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, default_value_t = DEFAULT_TOP_AUTHORS, help = "Contributors to list")]
        top: usize,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = self.common.config();
        let authenticated = config.is_authenticated();

        match self.command {
            Some(Commands::Report { owner, repo, json, ndjson, top }) => {
                let target = match &self.common.log_file {
                    Some(path) => LogTarget::File(path.clone()),
                    None => LogTarget::Stderr,
                };
                logging::init(&self.common.log_level, target)?;
                tracing::debug!(?config, "starting report");
                if !authenticated {
                    tracing::info!("no GITHUB_TOKEN set; unauthenticated rate limit applies");
                }
                let format = OutputFormat::from_flags(json, ndjson);
                crate::report::exec(&config, &owner, &repo, format, top)
            }
            Some(Commands::Dashboard { owner, repo, top, load }) => {
                run_dashboard(&self.common, &config, owner.as_deref(), repo.as_deref(), top, load)
            }
            None => run_dashboard(&self.common, &config, None, None, DEFAULT_TOP_AUTHORS, false),
        }
    }
}

fn run_dashboard(
    common: &CommonArgs,
    config: &Config,
    owner: Option<&str>,
    repo: Option<&str>,
    top: usize,
    load: bool,
) -> Result<()> {
    let target = match &common.log_file {
        Some(path) => LogTarget::File(path.clone()),
        None => LogTarget::Off,
    };
    logging::init(&common.log_level, target)?;
    tracing::debug!(?config, "starting dashboard");
    if !config.is_authenticated() {
        tracing::info!("no GITHUB_TOKEN set; unauthenticated rate limit applies");
    }

    let client = GitHubClient::new(config);
    let state = DashboardState::new(owner, repo, top);
    crate::tui::run(&client, state, load).map_err(|e| anyhow::anyhow!(e))
}
