use anyhow::Result;
use clap::Parser;
use colored::*;
use std::sync::Arc;

// Import from our modular crates
use newslens_cli::{
    display_banner, handle_input_with_history, print_help, render_answer, render_not_ready,
    render_summary, render_urls, Command, Session,
};
use newslens_core::QueryOutcome;
use newslens_openai::OpenAiClient;
use newslens_rag::{ResearchEngine, DEFAULT_INDEX_PATH};

#[derive(Parser)]
#[command(name = "newslens")]
#[command(about = "Index news articles and ask questions with cited sources", long_about = None)]
struct Cli {
    /// Article URL to index (repeat up to three times)
    #[arg(short, long = "url")]
    url: Vec<String>,

    /// Ask a single question and exit
    #[arg(short, long)]
    ask: Option<String>,

    /// Path of the persisted article index
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    index_path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // One client serves both the embeddings and the chat endpoints
    let client = Arc::new(OpenAiClient::from_env()?);
    let engine = ResearchEngine::new(client.clone(), client.clone(), cli.index_path.clone())?;

    // One-shot mode: process and/or ask, then exit
    if !cli.url.is_empty() || cli.ask.is_some() {
        if !cli.url.is_empty() {
            println!("{} Loading and processing articles...", "⏳".blue());
            let summary = engine.process_urls(&cli.url).await?;
            render_summary(&summary);
        }
        if let Some(question) = cli.ask {
            match engine.answer(&question).await? {
                QueryOutcome::Answered(answer) => render_answer(&answer),
                QueryOutcome::NotReady => render_not_ready(),
            }
        }
        return Ok(());
    }

    // Interactive mode
    display_banner();

    let mut session = Session::new();
    if engine.is_ready() {
        session.mark_ready();
        println!(
            "{} Found an existing index at {}; questions are ready.",
            "📦".cyan(),
            engine.index_path().display()
        );
    }

    let mut history = Vec::new();

    loop {
        let input = handle_input_with_history(&mut history).await?;

        let Some(command) = Command::parse(&input) else {
            continue;
        };

        match command {
            Command::Quit => {
                println!("{}", "👋 Goodbye!".green());
                break;
            }
            Command::Help => print_help(),
            Command::AddUrl(url) => match session.add_url(&url) {
                Ok(()) => println!(
                    "{} Added ({}/{})",
                    "🔗".cyan(),
                    session.urls().len(),
                    newslens_cli::URL_SLOTS
                ),
                Err(e) => println!("{} {}", "❌".red(), e),
            },
            Command::ListUrls => render_urls(session.urls()),
            Command::ClearUrls => {
                session.clear_urls();
                println!("{} URL slots cleared", "🧹".cyan());
            }
            Command::Process => {
                if session.urls().is_empty() {
                    println!("{} Add at least one URL before processing", "❌".red());
                    continue;
                }
                println!("{} Loading and processing articles...", "⏳".blue());
                match engine.process_urls(session.urls()).await {
                    Ok(summary) => {
                        session.mark_ready();
                        render_summary(&summary);
                    }
                    Err(e) => println!("{} An error occurred: {}", "❌".red(), e),
                }
            }
            Command::Ask(question) => {
                println!("{} Fetching the answer...", "🤖".blue());
                match engine.answer(&question).await {
                    Ok(QueryOutcome::Answered(answer)) => render_answer(&answer),
                    Ok(QueryOutcome::NotReady) => render_not_ready(),
                    Err(e) => println!("{} An error occurred: {}", "❌".red(), e),
                }
            }
        }
    }

    Ok(())
}
