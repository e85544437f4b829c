//! ecoscore-server binary

use analysis::BillAnalyzer;
use server::{init_tracing, serve, ServerConfig};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    init_tracing("server=info,analysis=info,tower_http=info");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config, BillAnalyzer::default()).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
