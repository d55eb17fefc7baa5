//! # text2sql-chat
//!
//! Entry point of the terminal chat client.

use anyhow::Result;
use clap::Parser;
use std::{fs::File, sync::Mutex, time::Duration};
use text2sql_chat::{api_client::ApiClient, run};
use tokio::io::{stdin, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "text2sql-chat.log";

#[derive(Parser, Debug)]
#[command(author, version, about = "Chat with your database in natural language", long_about = None)]
struct Cli {
    /// Base URL of the text2sql server
    #[arg(long, env = "API_URL", default_value = "http://localhost:8000")]
    api_url: String,
    /// Seconds to wait for an answer
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Log to a file so the conversation stays readable.
    let log_file = File::create(LOG_FILE)?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = ApiClient::new(&cli.api_url, Duration::from_secs(cli.timeout))?;

    let mut stdout = std::io::stdout();
    run(&client, BufReader::new(stdin()), &mut stdout).await
}
