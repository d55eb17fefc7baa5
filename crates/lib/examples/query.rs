//! Asks one question against a local copy of the sample database, without
//! the HTTP server.
//!
//! ```sh
//! GOOGLE_API_KEY=... cargo run --example query -- "How many artists are there?"
//! ```

use dotenvy::dotenv;
use std::env;
use text2sql::{
    providers::{
        db::sqlite::SqliteProvider,
        factory::{create_provider, ProviderConfig},
    },
    sample::seed_sample_database,
    QueryExecutor, QueryGateway, SqlTranslator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} '<question>'", args[0]);
        return Ok(());
    }

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "chinook.db".to_string());
    seed_sample_database(&db_path).await?;

    let config = ProviderConfig {
        provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        api_url: env::var("AI_API_URL").ok(),
        api_key: env::var("GOOGLE_API_KEY").or_else(|_| env::var("AI_API_KEY")).ok(),
        ..Default::default()
    };

    let gateway = QueryGateway::new(
        SqlTranslator::new(create_provider(&config)?),
        QueryExecutor::new(Box::new(SqliteProvider::new(db_path))),
    );

    match gateway.answer(&args[1]).await {
        Ok(outcome) => {
            println!("--- Generated SQL ---");
            println!("{}", outcome.sql);
            println!("\n--- Answer ---");
            println!("{}", outcome.summary);
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
