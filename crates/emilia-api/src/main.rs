//! Emilia CLI and gateway entry point.
//!
//! Binary name: `emilia`
//!
//! Parses CLI arguments, initializes tracing and application state, then
//! either starts the event gateway or runs a one-shot command.

mod http;
mod state;

use clap::{Parser, Subcommand};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use emilia_core::memory::store::MemoryStore;
use emilia_infra::config::{data_dir, load_config, memory_path};
use emilia_infra::memory::JsonMemoryStore;
use emilia_infra::secret;

use state::AppState;

#[derive(Parser)]
#[command(name = "emilia", version, about = "Companion chat bot with voiced replies")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the event gateway
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8320)]
        port: u16,
    },

    /// Validate configuration, secrets, and the memory file
    Check,

    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "emilia", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState::init().await?;

            println!();
            println!(
                "  {} {} is online as {}",
                console::style("🌸").bold(),
                console::style(&state.config.bot_name).magenta(),
                console::style(state.router.connector().bot_name()).cyan()
            );
            println!(
                "  {} Memory at {}",
                console::style("📖").bold(),
                console::style(state.data_dir.join(&state.config.memory_file).display()).dim()
            );

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Gateway listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::gateway::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Gateway stopped.");
        }

        Commands::Check => {
            check().await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// One-shot health check: secrets present, config readable, memory file
/// parseable. Does not touch the network.
async fn check() -> anyhow::Result<()> {
    let data_dir = data_dir();
    let config = load_config(&data_dir).await;

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", console::style("✓").green())
        } else {
            format!("{}", console::style("✗").red())
        }
    };

    let has_token = secret::required(secret::CHAT_TOKEN_VAR).is_ok();
    let has_key = secret::required(secret::LLM_API_KEY_VAR).is_ok();

    let store = JsonMemoryStore::new(memory_path(&data_dir, &config));
    let memory = store.load().await;

    println!();
    println!(
        "  {} Health check for '{}'",
        console::style("🔍").bold(),
        console::style(&config.bot_name).cyan()
    );
    println!();
    println!("  {} {} set", check_mark(has_token), secret::CHAT_TOKEN_VAR);
    println!("  {} {} set", check_mark(has_key), secret::LLM_API_KEY_VAR);
    match &memory {
        Ok(map) => println!(
            "  {} Memory file readable ({} user{})",
            check_mark(true),
            map.len(),
            if map.len() == 1 { "" } else { "s" }
        ),
        Err(err) => println!("  {} Memory file: {err}", check_mark(false)),
    }
    println!();

    if has_token && has_key && memory.is_ok() {
        Ok(())
    } else {
        anyhow::bail!("check failed")
    }
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["emilia", "serve"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8320);
            }
            _ => panic!("expected serve"),
        }
    }
}
