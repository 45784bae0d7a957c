use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use measure_space_mcp::config::ServerConfig;
use measure_space_mcp::service::MeasureSpace;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "measure_space_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MeasureSpace MCP server");

    let service = MeasureSpace::new(ServerConfig::from_env())?;
    let server = service.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
