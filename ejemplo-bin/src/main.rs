//!
//! redis-ejemplo: runs the Ejemplo script against a Redis server.
//!

#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

use clap::Parser;
use ejemplo_lib::{script, Client, Report, DEFAULT_HOST, DEFAULT_PORT};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "redis-ejemplo",
    version,
    author,
    about = "Issue PING, SET, GET and HSET against a Redis server"
)]
struct Cli {
    #[clap(long, default_value = DEFAULT_HOST)]
    host: String,

    #[clap(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

/// `flavor = "current_thread"`: every command is awaited before the next one is sent.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = set_up_logging() {
        eprintln!("failed to install logging: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "aborting");
            ExitCode::FAILURE
        }
    }
}

/// The connection lives only inside this function, so it is closed before
/// `main` returns on either path.
async fn run(cli: &Cli) -> ejemplo_lib::Result<Report> {
    info!("Connecting to redis...");
    let mut client = Client::connect(&cli.host, cli.port).await?;
    info!("Redis connected!!");

    script::run(&mut client).await
}

/// Log to stdout, filtered by `RUST_LOG` and defaulting to `info`.
fn set_up_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
