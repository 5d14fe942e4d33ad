//! Command-line entry point.
//!
//! Usage: `statichttp [CONFIG.json]`. Without a config file the server serves
//! `./public` on port 8088.

use log::info;
use statichttp_rs::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {path}");
            ServerConfig::from_json_file(&path)?
        }
        None => ServerConfig::default(),
    };

    let server = HttpServer::new(config);
    server.start().await?;

    Ok(())
}
