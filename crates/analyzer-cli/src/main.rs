//! Command-line interface for the stock analyzer
//!
//! Runs in two modes: interactive shell when invoked without arguments,
//! or single-query mode answering the arguments joined into one query.

use analyzer_core::Result;
use analyzer_llm::{LlmProvider, OpenAiConfig, OpenAiProvider};
use analyzer_market::YahooFinanceClient;
use analyzer_pipeline::{
    AnalyzerConfig, LlmTickerResolver, PatternTickerResolver, QueryOutcome, QueryPipeline,
    ResolverMode, TickerResolver, failure_message,
};
use clap::Parser;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-analyzer")]
#[command(about = "Answer natural-language stock price queries", long_about = None)]
struct Args {
    /// Query to answer; without one, starts the interactive shell
    query: Vec<String>,

    /// Delegate ticker extraction to the configured LLM
    #[arg(long)]
    llm: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AnalyzerConfig::from_env();
    if args.llm {
        config.resolver_mode = ResolverMode::Llm;
    }

    analyzer_utils::init_tracing(if config.debug { "debug" } else { &config.log_level });

    // Credential problems surface here, before any query is accepted
    config.validate()?;

    let resolver = build_resolver(&config)?;
    info!(resolver = resolver.name(), "stock analyzer initialized");

    let pipeline = QueryPipeline::new(resolver, Arc::new(YahooFinanceClient::new()));

    if args.query.is_empty() {
        interactive_mode(&pipeline).await;
    } else {
        let query = args.query.join(" ");
        println!("{}", answer_line(&pipeline, &query).await);
    }

    Ok(())
}

/// Build the resolution strategy named by the configuration
fn build_resolver(config: &AnalyzerConfig) -> Result<Arc<dyn TickerResolver>> {
    match config.resolver_mode {
        ResolverMode::Pattern => Ok(Arc::new(PatternTickerResolver::new())),
        ResolverMode::Llm => {
            // validate() has already required the key in this mode
            let api_key = config.llm_api_key.clone().unwrap_or_default();
            let mut llm_config =
                OpenAiConfig::new(api_key).with_timeout(config.request_timeout.as_secs());
            if let Some(endpoint) = &config.llm_endpoint {
                llm_config = llm_config.with_api_base(endpoint.clone());
            }

            let provider = OpenAiProvider::with_config(llm_config).map_err(|e| {
                analyzer_core::AnalyzerError::ConfigurationInvalid(e.to_string())
            })?;

            Ok(Arc::new(LlmTickerResolver::new(
                Arc::new(provider) as Arc<dyn LlmProvider>,
                config.llm_model.clone(),
            )))
        },
    }
}

/// Answer one query with the emoji-prefixed line the shell prints
async fn answer_line(pipeline: &QueryPipeline, query: &str) -> String {
    match pipeline.run(query).await {
        QueryOutcome::Done(answer) => format!("📈 {answer}"),
        QueryOutcome::Failed(err) => {
            tracing::error!(class = err.class(), error = %err, "query failed");
            format!("❌ {}", failure_message(&err))
        },
    }
}

async fn interactive_mode(pipeline: &QueryPipeline) {
    println!("🚀 Stock Analyzer");
    println!("{}", "=".repeat(50));
    println!("Ask me about stock prices! (Type 'quit' to exit)");
    println!("Examples:");
    println!("  - What's the price of Tesla?");
    println!("  - How much is Apple stock?");
    println!("  - NVIDIA current price");
    println!();

    let stdin = std::io::stdin();
    loop {
        print!("📊 Your query: ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                // EOF or broken stdin
                println!("\n👋 Goodbye!");
                break;
            },
            Ok(_) => {},
        }

        let query = line.trim();
        if matches!(query.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("👋 Goodbye!");
            break;
        }
        if query.is_empty() {
            println!("Please enter a query.");
            continue;
        }

        println!("🤖 Processing...");
        println!("{}", answer_line(pipeline, query).await);
        println!();
    }
}
