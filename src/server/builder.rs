//! Server bootstrap

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting scribegate backend");

    let config = Config::load().await?;

    let server = HttpServer::new(&config).await?;
    info!(
        "Serving at http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/auth/login - Sign in");
    info!("   GET  /api/content/pricing-plans - Public pricing plans");
    info!("   GET  /api/content/reviews - Public reviews");
    info!("   GET  /api/content/services - Public service listings");
    info!("   *    /api/admin/... - Admin console (authenticated)");

    server.start().await
}
