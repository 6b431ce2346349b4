//! promo CLI - marketing post drafting
//!
//! Usage:
//!   promo draft [QUESTION]   Draft three post options, then revise on feedback
//!   promo init [PATH]        Write the default configuration file

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use promo_agent::{AnthropicClient, Model};
use promo_core::PromoConfig;
use promo_orchestrator::Workflow;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "promo")]
#[command(author, version, about = "Sequential marketing post drafting workflow")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft three post options and revise them on feedback
    Draft {
        /// Marketing request (prompted for interactively if omitted)
        question: Option<String>,

        /// Model to use (opus, sonnet, haiku); defaults from config
        #[arg(short, long)]
        model: Option<CliModel>,

        /// Maximum tokens per generator response; defaults from config
        #[arg(long)]
        max_tokens: Option<usize>,
    },

    /// Write the default configuration to .promo/config.toml
    Init {
        /// Repository path (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// CLI-friendly model enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliModel {
    Opus,
    Sonnet,
    Haiku,
}

impl From<CliModel> for Model {
    fn from(m: CliModel) -> Self {
        match m {
            CliModel::Opus => Model::Opus,
            CliModel::Sonnet => Model::Sonnet,
            CliModel::Haiku => Model::Haiku,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Draft {
            question,
            model,
            max_tokens,
        } => cmd_draft(question, model, max_tokens).await,
        Commands::Init { path } => cmd_init(path),
    }
}

async fn cmd_draft(
    question: Option<String>,
    model: Option<CliModel>,
    max_tokens: Option<usize>,
) -> Result<()> {
    let config = PromoConfig::load_or_default(&std::env::current_dir()?)?;

    let model: Model = match model {
        Some(m) => m.into(),
        None => config
            .models
            .default
            .parse()
            .map_err(anyhow::Error::msg)?,
    };
    let max_tokens = max_tokens.unwrap_or(config.generation.max_tokens);
    info!("Using model {} ({} max tokens)", model, max_tokens);

    let client = AnthropicClient::new(model)
        .with_max_tokens(max_tokens)
        .with_api_key_env(config.models.api_key_env);
    let workflow = Workflow::new(Arc::new(client));

    let question = match question {
        Some(q) => q,
        None => read_line("Enter your marketing request: ")?,
    };
    if question.trim().is_empty() {
        anyhow::bail!("No marketing request given");
    }

    let mut state = workflow.run_initial(question.trim()).await?;
    print_posts("Generated Posts", state.marketing_posts().unwrap_or(&[]));

    // One revision round per feedback submission; empty input accepts
    loop {
        let feedback = read_line("\nRequest revisions? Type your feedback or press Enter to accept: ")?;
        if feedback.trim().is_empty() {
            state = workflow.accept(&state)?;
            println!("\nYou accepted the posts.");
            break;
        }

        state = workflow.run_revision(&state, feedback.trim()).await?;
        print_posts("Revised Posts", state.final_posts().unwrap_or(&[]));
    }

    tracing::debug!(
        "Run {} finished in phase {}",
        state.run_id(),
        state.phase()
    );
    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    PromoConfig::write_default(&path)?;
    println!("Initialized promo in {:?}", path);
    println!("Created:");
    println!("  .promo/config.toml");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn print_posts(title: &str, posts: &[String]) {
    println!("\n--- {} ---", title);
    for (idx, post) in posts.iter().enumerate() {
        println!("Option {}: {}", idx + 1, post);
    }
}
