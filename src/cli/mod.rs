use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub mod commands;

use crate::config::{self, HostConfig};
use commands::{check, optimize, predict, serve, OptimizeArgs, PredictArgs};

#[derive(Parser)]
#[command(name = "dairyfeed")]
#[command(about = "Dairy feed planner: web server, readiness check and model service client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the model service lives.
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// Base URL of the model service
    #[arg(short, long, env = "UPSTREAM_URL", default_value = config::DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Seconds to wait for the model service before giving up
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = config::DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    pub upstream_timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080).
        /// Defaults to 0.0.0.0:$PORT, with PORT falling back to 5000.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory with the built frontend bundle
        #[arg(short, long, env = "STATIC_DIR", default_value = config::DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        #[command(flatten)]
        upstream: UpstreamArgs,
    },
    /// Report whether the deployment is ready to serve
    Check {
        /// Directory with the built frontend bundle
        #[arg(short, long, env = "STATIC_DIR", default_value = config::DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        #[command(flatten)]
        upstream: UpstreamArgs,
    },
    /// Predict milk yield for a ration
    Predict(PredictArgs),
    /// Find the least-cost ration for a milk target
    Optimize(OptimizeArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir, upstream } => {
                let config = HostConfig {
                    bind_address: bind_address.unwrap_or_else(config::default_bind_address),
                    static_dir,
                    upstream_url: upstream.upstream_url,
                    upstream_timeout: Duration::from_secs(upstream.upstream_timeout_secs),
                };
                serve(&config).await?;
            }
            Commands::Check { static_dir, upstream } => {
                let config = HostConfig {
                    bind_address: config::default_bind_address(),
                    static_dir,
                    upstream_url: upstream.upstream_url,
                    upstream_timeout: Duration::from_secs(upstream.upstream_timeout_secs),
                };
                check(&config).await?;
            }
            Commands::Predict(args) => {
                predict(args).await?;
            }
            Commands::Optimize(args) => {
                optimize(args).await?;
            }
        }
        Ok(())
    }
}
