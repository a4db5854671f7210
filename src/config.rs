use clap::Parser;
use std::net::SocketAddr;

/// Command-line configuration for the API server.
///
/// Every option can also come from the environment, which is how the service is
/// usually configured in containers.
#[derive(Parser, Debug, Clone)]
#[command(name = "text_api")]
#[command(about = "Deterministic text normalization and keyword extraction API")]
#[command(version)]
pub struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, env = "TEXT_API_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "text_api=debug")
    #[arg(long, env = "TEXT_API_LOG", default_value = "info")]
    pub log_level: String,
}
