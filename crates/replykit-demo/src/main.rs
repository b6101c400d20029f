// Rust guideline compliant 2026-10-12

//! Replykit Demo
//!
//! Serves the demonstration router and inspects serialized envelopes.

use anyhow::Context;
use clap::Parser;
use replykit_axum::ReplyConfig;
use replykit_demo::logging::{self, LogLevel};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "replykit-demo",
    version,
    about = "Replykit: standardized response envelopes",
    after_help = "Examples:\n  replykit-demo serve --port 1337\n  curl -s localhost:1337/success-nested | replykit-demo status -\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Serve the demonstration routes
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 1337)]
        port: u16,

        /// Envelope config file (TOML)
        #[arg(long, default_value = "replykit.toml")]
        config: PathBuf,

        /// Logging level
        #[arg(long, value_enum, default_value_t = LogLevel::Info)]
        log_level: LogLevel,

        /// Append JSON logs to this file instead of stdout
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the aggregate status of a serialized envelope
    Status {
        /// Envelope JSON file ('-' for stdin)
        path: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            config,
            log_level,
            log_file,
        } => {
            let _guard = logging::init(log_level, log_file.as_deref())
                .context("opening log file")?;
            let config = ReplyConfig::load(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            serve(&host, port, config)?;
        }
        Commands::Status { path, json } => {
            let content = read_input(&path)?;
            let summary = replykit_demo::summarize(&content)
                .with_context(|| format!("{path} is not a valid envelope"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
    }

    Ok(())
}

fn serve(host: &str, port: u16, config: ReplyConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        tracing::info!(%addr, "replykit demo listening");
        axum::serve(listener, replykit_demo::router(config))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("replykit demo stopped");
        Ok(())
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
    }
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
}
