mod logging;
mod render;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use time::Date;

use apod_client::{ClientConfig, GatewayClient, ViewCoordinator};
use apod_core::date::{parse_iso_date, today_utc};
use apod_gateway::GatewayConfig;

/// Astronomy Picture of the Day explorer.
#[derive(Parser)]
#[command(name = "apod", version, about = "Astronomy Picture of the Day explorer")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gateway that holds the upstream credentials
    Serve {
        /// Port to listen on (overrides APOD_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Path to TLS certificate PEM file (requires --tls-key)
        #[arg(long)]
        tls_cert: Option<PathBuf>,
        /// Path to TLS private key PEM file (requires --tls-cert)
        #[arg(long)]
        tls_key: Option<PathBuf>,
    },

    /// Show the picture of the day through a running gateway
    Show {
        /// Date to show (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_past_date)]
        date: Option<Date>,
        /// Also ask for a short poem about the picture
        #[arg(long)]
        poem: bool,
        /// Print the full explanation instead of an excerpt
        #[arg(long)]
        full: bool,
        /// Gateway base URL (overrides APOD_GATEWAY_URL)
        #[arg(long)]
        gateway: Option<String>,
    },
}

/// Accept an ISO date that is not after today.
fn parse_past_date(raw: &str) -> Result<Date, String> {
    let date = parse_iso_date(raw).map_err(|e| format!("expected YYYY-MM-DD: {}", e))?;
    if date > today_utc() {
        return Err(format!("{} is in the future", raw));
    }
    Ok(date)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Serve {
            port,
            tls_cert,
            tls_key,
        } => {
            let mut config = match GatewayConfig::from_env() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    process::exit(1);
                }
            };
            if let Some(port) = port {
                config.port = port;
            }

            if let Err(e) = rt.block_on(apod_gateway::start_server(config, tls_cert, tls_key)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
        Commands::Show {
            date,
            poem,
            full,
            gateway,
        } => {
            let mut config = ClientConfig::from_env();
            if let Some(url) = gateway {
                config = config.with_gateway_url(url);
            }

            let code = rt.block_on(cmd_show(config, date, poem, full));
            process::exit(code);
        }
    }
}

/// Drive the view coordinator once and print the result.
async fn cmd_show(config: ClientConfig, date: Option<Date>, poem: bool, full: bool) -> i32 {
    let gateway = Arc::new(GatewayClient::new(config.gateway_url, config.timeout));
    let mut view = ViewCoordinator::new(gateway.clone(), gateway);

    view.select_date(date);
    view.settle().await;

    if view.state().picture.failure().is_some() {
        eprintln!("Something went wrong.");
        return 1;
    }

    if poem {
        if view.request_commentary() {
            view.settle().await;
        } else {
            tracing::info!("commentary is only available for images");
        }
    }

    print!("{}", render::render(view.state(), full));
    0
}
