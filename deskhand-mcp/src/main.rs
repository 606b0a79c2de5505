//! deskhand-mcp: MCP server exposing jokes, Jira issues, and ServiceNow incidents.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use deskhand_core::Config;
use deskhand_mcp::{Dispatcher, ServerContext, server, stdio, tools};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "MCP server for jokes, Jira issue search, and ServiceNow incident search")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  /// Address the HTTP endpoint listens on
  #[arg(long = "bind", value_name = "ADDR", default_value = "127.0.0.1:3000")]
  bind: SocketAddr,

  /// Speak newline-delimited JSON-RPC on stdin/stdout instead of HTTP
  #[arg(long = "stdio", conflicts_with = "bind")]
  stdio: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr; stdout carries protocol messages in stdio mode.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let config = Config::from_env().context("Failed to load configuration")?;
  let context = ServerContext::from_config(&config)?;
  let registry = tools::registry().context("Failed to register tools")?;
  tracing::info!(tools = registry.len(), "Registered tools");

  let dispatcher = Arc::new(Dispatcher::new(registry, Arc::new(context)));

  if cli.stdio {
    stdio::serve_stdio(dispatcher).await
  } else {
    server::serve(cli.bind, dispatcher).await
  }
}
