use avaliacoes_core::Locale;
use avaliacoes_http::{self, server::ServerConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Avaliações HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "AVALIACOES_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "AVALIACOES_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "AVALIACOES_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Message language when Accept-Language names nothing supported (pt-BR, en, es)
    #[arg(long, env = "AVALIACOES_DEFAULT_LOCALE", default_value = "en", value_parser = parse_locale)]
    default_locale: Locale,

    /// Base URL for absolute Location headers (path-only when unset)
    #[arg(long, env = "AVALIACOES_PUBLIC_URL")]
    public_url: Option<String>,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_tag(value).ok_or_else(|| format!("unsupported locale: {value}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Some(Commands::Config { file }) => ServerConfig::from_file(&file)?,
        None => ServerConfig {
            host: cli.host,
            port: cli.port,
            default_locale: cli.default_locale,
            log_level: cli.log_level,
            public_url: cli.public_url,
        },
    };

    // Tracing is installed by the library, using the configured log level
    avaliacoes_http::start_with_config(config).await
}
