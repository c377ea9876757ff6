//! Terminal chat client: a thin front end over the same orchestrator the
//! HTTP server uses. One session key per run; type `exit` to quit.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use api::chat::{prompts, ChatEngine};
use api::config::Config;
use api::db::{create_pool, init_schema};
use api::llm_client::LlmClient;
use api::profile::data::default_profile;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Keep the console quiet by default; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    let llm = LlmClient::new(config.gemini_api_key.clone());
    let profile = Arc::new(default_profile());
    let engine = ChatEngine::new(db, llm, profile, config.portfolio_name.clone());

    let conv_key = Uuid::new_v4().to_string();
    let name = &config.portfolio_name;

    println!("Session ID: {conv_key}\n");
    println!("{name}'s AI Portfolio Assistant");
    println!("Ask me anything about {name}'s skills, education, projects, or experience!");
    println!("Type 'exit' to quit.\n");

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("\nThanks for visiting {name}'s portfolio!");
            break;
        }

        match engine.handle_turn(&conv_key, input).await {
            Ok(turn) => {
                println!("\nAssistant: {}\n", turn.message.trim());
                if turn.should_ask_for_details {
                    println!("Assistant: {}\n", prompts::ask_for_details_reply(name));
                }
            }
            Err(e) => {
                eprintln!("\nError: {e}\n");
            }
        }
    }

    Ok(())
}
