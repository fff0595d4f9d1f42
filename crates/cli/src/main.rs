// ABOUTME: CLI for extracting news records from saved tibia.com markup.
// ABOUTME: Reads an article box or archive table from a file or stdin and prints JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::Value;
use tibianews::{extract_article, extract_listing, ApiGeneration, ExtractOptions, FailurePolicy};
use tracing_subscriber::EnvFilter;

/// Extract structured news records from tibia.com markup.
#[derive(Parser, Debug)]
#[command(name = "tibianews")]
#[command(about = "Extract news records from tibia.com markup and print JSON", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// API generation to follow: "current" or "legacy" (also "v4"/"v3").
    #[arg(long, global = true, env = "TIBIANEWS_GENERATION", default_value = "current")]
    generation: String,

    /// Shorthand for --generation legacy.
    #[arg(long, global = true, default_value_t = false)]
    legacy: bool,

    /// Force strict failure handling regardless of generation.
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a single article from an article box fragment.
    Article {
        /// Numeric news id.
        #[arg(long)]
        id: u32,

        /// Canonical URL of the article.
        #[arg(long)]
        url: String,

        #[command(flatten)]
        input: Input,
    },
    /// Extract every row of a news archive table.
    List {
        /// Host used to build url_api links; omitted when empty.
        #[arg(long, env = "TIBIANEWS_API_HOST", default_value = "")]
        api_host: String,

        #[command(flatten)]
        input: Input,
    },
}

#[derive(ClapArgs, Debug)]
struct Input {
    /// Markup file. Use "-" or omit to read from stdin.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let generation = if args.legacy {
        ApiGeneration::Legacy
    } else {
        ApiGeneration::from(args.generation.as_str())
    };

    let output = match &args.command {
        Command::Article { id, url, input } => {
            let opts = options(&args, generation, "");
            let markup = read_markup(input)?;
            let article = extract_article(*id, url, &markup, &opts)
                .with_context(|| format!("extracting article {}", id))?;
            article.to_value(generation)?
        }
        Command::List { api_host, input } => {
            let opts = options(&args, generation, api_host);
            let markup = read_markup(input)?;
            let items = extract_listing(&markup, &opts).context("extracting news listing")?;
            let values = items
                .iter()
                .map(|item| item.to_value(generation))
                .collect::<serde_json::Result<Vec<_>>>()?;
            Value::Array(values)
        }
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn options(args: &Args, generation: ApiGeneration, api_host: &str) -> ExtractOptions {
    let mut builder = ExtractOptions::builder()
        .generation(generation)
        .api_host(api_host);
    if args.strict {
        builder = builder.policy(FailurePolicy::Strict);
    }
    builder.build()
}

fn read_markup(input: &Input) -> Result<String> {
    match &input.file {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                return Err(anyhow!("file not found: {}", path.display()));
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
