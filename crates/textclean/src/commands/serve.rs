//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use textclean_core::Config;

use crate::server::TextServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let server = TextServer::from_config(config);

    info!(
        top_words = config.top_words_limit(),
        max_input_bytes = ?config.input_limit(),
        "starting MCP server on stdio"
    );

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
