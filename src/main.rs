//! Evaldesk - Entry Point
//!
//! Console front-end for the routing pipeline. Reads a free-text query,
//! classifies its intent with one supervisor call, and runs the matching
//! single-step or two-step plan, printing the final text. Supports one-shot
//! mode via --query and an interactive loop otherwise.

use clap::Parser;
use evaldesk::core::error::Result;
use evaldesk::llm::client::LlmClient;
use evaldesk::route::handle_query;

use std::io::{self, Write};
use tokio::runtime::Runtime;

/// Evaldesk - route technology evaluation queries to specialist pipelines
#[derive(Parser, Debug)]
#[command(name = "evaldesk")]
#[command(about = "LLM-routed assistant for technology evaluation queries")]
struct Args {
    /// Run a single query and exit instead of starting the interactive loop
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evaldesk=info".into()),
        )
        .init();

    let args = Args::parse();

    let client = LlmClient::from_env()?;
    let rt = Runtime::new()?;

    println!("=====================================");
    println!("Model:    {}", client.model());
    println!("Endpoint: {}", client.api_url());
    println!("=====================================\n");

    if let Some(query) = args.query {
        return run_query(&rt, &client, &query);
    }

    println!("Enter a query, or quit/q to exit.\n");

    loop {
        print!("query >> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        // A failed run aborts this query only, not the loop
        if let Err(e) = run_query(&rt, &client, input) {
            tracing::error!(error = %e, "query failed");
            println!("Query failed: {}\n", e);
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Route one query and print the decision and final result
fn run_query(rt: &Runtime, client: &LlmClient, query: &str) -> Result<()> {
    let (decision, result) = rt.block_on(handle_query(client, query))?;

    println!();
    println!("Intent: {} ({})", decision.intent, decision.reason);
    println!("\n=== Result ===\n");
    println!("{}\n", result);
    Ok(())
}
