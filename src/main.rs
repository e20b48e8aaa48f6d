//! Calorie Target Estimator (caltarget)
//!
//! An MCP server for personalized daily calorie targets.

use caltarget::build_info;
use caltarget::config::Config;
use caltarget::mcp::CaltargetService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive().parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner(&config);
    eprintln!("Starting MCP server on stdio...");

    let service = CaltargetService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    tracing::info!("MCP server initialized");

    server.waiting().await?;
    tracing::info!("MCP server stopped");

    Ok(())
}
