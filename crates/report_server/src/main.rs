//! Report Facade Server
//!
//! HTTP facade for the reporting engine: report rendering, embedded-image
//! retrieval, and report discovery.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_server::config::{build_config, CliArgs as ConfigCliArgs};
use report_server::server::Server;

/// Report Facade Server - HTTP front end for the reporting engine
#[derive(Parser, Debug)]
#[command(name = "report_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "REPORT_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "REPORT_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REPORT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory holding report design files
    #[arg(long, env = "REPORT_DESIGN_DIR", value_name = "DIR")]
    report_dir: Option<PathBuf>,

    /// Directory rendered output is written to
    #[arg(long, env = "REPORT_OUTPUT_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// External renderer command
    #[arg(long, env = "REPORT_RENDERER_CMD")]
    renderer_cmd: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            report_dir: args.report_dir,
            output_dir: args.output_dir,
            renderer_cmd: args.renderer_cmd,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialize tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Report Facade Server v{}", report_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        report_dir = %config.report_dir.display(),
        output_dir = %config.output_dir.display(),
        renderer = %config.renderer_command,
        "Server configuration loaded"
    );

    // Create and start the server; a missing engine degrades, not aborts
    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
