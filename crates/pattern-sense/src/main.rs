//! # PatternSense MCP Server
//!
//! Model Context Protocol server that classifies short integer sequences.
//!
//! ## Overview
//!
//! This server provides MCP tools for:
//! - Full analysis (hill/valley/plain shape, duplicates, advanced classification)
//! - Advanced classification (arithmetic, geometric, symmetric, trend)
//! - Inspecting the active analysis settings
//!
//! ## Architecture
//!
//! This is Layer 2 - the main MCP server binary that ties together:
//! - pattern-sense-core: Core types and configuration
//! - pattern-sense-detector: Detectors, classifier and shape analysis
//!
//! ## Usage
//!
//! ```text
//! pattern-sense [--config <path>]
//! ```
//!
//! stdout carries the MCP transport, so all logging goes to stderr.

use anyhow::Context;
use pattern_sense::PatternSenseServer;
use pattern_sense_core::ServerConfig;
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .map(|i| {
            args.get(i + 1)
                .cloned()
                .context("--config requires a file path")
        })
        .transpose()?;

    let config = match &config_path {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => ServerConfig::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "PatternSense MCP Server v{} starting (config: {})...",
        env!("CARGO_PKG_VERSION"),
        config_path.as_deref().unwrap_or("defaults")
    );

    let server = PatternSenseServer::from_config(&config)?;

    tracing::info!(
        "Server initialized (arity: {}, tolerance: {}, concurrent: {}), starting stdio transport...",
        config.analysis.arity,
        config.analysis.tolerance,
        config.analysis.concurrent
    );

    // Serve the MCP server over stdio
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Error starting server: {}", e);
        e
    })?;

    tracing::info!("PatternSense MCP Server running on stdio");

    // Wait for the service to complete
    service.waiting().await?;

    tracing::info!("PatternSense MCP Server shutting down");

    Ok(())
}
