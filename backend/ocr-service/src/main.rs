mod api;
mod config;
mod response;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use config::Config;

#[derive(Parser)]
#[command(name = "rxproof-ocr")]
#[command(about = "Mock prescription-parsing service for the pharmacy frontend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the OCR HTTP service
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Probe a running service's health endpoint
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            logging::init_logger(&config.log_dir, &config.log_level);
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("ocr-service is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let app = api::build_router();

    let addr = format!("{}:{}", config.bind_address, config.port);
    info!(addr = %addr, "OCR service listening");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
