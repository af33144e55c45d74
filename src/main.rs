use std::sync::Arc;

use clap::Parser;

use veridoc::ocr::VisionOcrClient;
use veridoc::server::{self, AppState};
use veridoc::utils::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "veridoc")]
#[command(about = "Document OCR and verification server")]
struct Args {
    /// Path to the configuration JSON file
    #[arg(long, short = 'c')]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veridoc=info,tower_http=debug".into()),
        )
        .init();

    let config = match args.config.as_deref() {
        Some(path) => AppConfig::init_from(path)?,
        None => match AppConfig::init() {
            Ok(config) => config,
            Err(_) => {
                tracing::warn!("No configuration file found, using defaults");
                AppConfig::get()
            }
        },
    };

    let ocr = VisionOcrClient::from_env(&config.ocr)?;
    let state = AppState::new(Arc::new(ocr));

    let addr = std::env::var("VERIDOC_ADDR").unwrap_or_else(|_| config.host_url.to_string());
    let socket_addr: std::net::SocketAddr = addr.parse()?;

    server::start_server(socket_addr, state).await?;

    Ok(())
}
